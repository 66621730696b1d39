//! Source file discovery.
//!
//! Include and ignore entries without `*` or `?` are literal paths relative to
//! the source root; everything else is a glob matched against the full path.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

use crate::config::TEST_FILE_PATTERNS;

/// Directories that never contain project sources.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Result of scanning files.
pub struct ScanResult {
    /// Source files, sorted and deduplicated.
    pub files: Vec<String>,
    /// Paths that could not be accessed.
    pub skipped_count: usize,
}

/// Collect the source files under `base_dir`.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base = Path::new(base_dir);
    let ignores = IgnoreSet::new(base, ignore_patterns, ignore_test_files, verbose);

    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    for root in scan_roots(base, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn(verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) && !ignores.matches(path) {
                files.push(path.to_string_lossy().into_owned());
            }
        }
    }

    // Overlapping includes may yield the same file twice.
    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

/// Literal ignore prefixes plus compiled ignore globs.
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base: &Path, patterns: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut globs = Vec::new();

        for p in patterns {
            if !is_glob_pattern(p) {
                prefixes.push(base.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => globs.push(pattern),
                Err(e) => warn(verbose, format_args!("Invalid ignore pattern '{}': {}", p, e)),
            }
        }

        if ignore_test_files {
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, globs }
    }

    fn matches(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base itself, or each include that resolves.
fn scan_roots(base: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let joined = base.join(inc);
        if !is_glob_pattern(inc) {
            if joined.exists() {
                roots.push(joined);
            } else {
                warn(
                    verbose,
                    format_args!("Include path does not exist: {}", joined.display()),
                );
            }
            continue;
        }
        match glob(&joined.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|p| p.is_dir())),
            Err(e) => warn(verbose, format_args!("Invalid glob pattern '{}': {}", inc, e)),
        }
    }
    roots
}

fn warn(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
