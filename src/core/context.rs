use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        catalog::Catalog,
        diagnostics::{Diagnostic, DiagnosticCollector},
        extract::extract_source,
        file_scanner::scan_files,
        handlers::HandlerRegistry,
    },
};

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

/// Output of a full extraction run.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    /// Merged catalog, files in sorted path order.
    pub catalog: Catalog,
    /// Call-site diagnostics, grouped by file in the same order.
    pub diagnostics: Vec<Diagnostic>,
    pub parse_failures: Vec<ParseFailure>,
    /// Number of files successfully extracted.
    pub files_checked: usize,
}

/// Pipeline context: configuration, discovered files, and handlers.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--output`)
/// 2. `.i18nextractrc.json` config file
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory that was scanned; occurrence paths are relative to it.
    pub root_dir: PathBuf,

    /// Source files to extract, sorted.
    pub files: Vec<String>,

    pub handlers: HandlerRegistry,

    pub verbose: bool,
}

impl ExtractContext {
    /// Load configuration and discover source files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read or is invalid, or if
    /// the source root is not valid UTF-8.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --source-root arg > current directory
        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&search_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        // The CLI source root wins over the configured one.
        let root_dir = match &common_args.source_root {
            Some(source_root) => source_root.clone(),
            None => PathBuf::from(&config.source_root),
        };
        if let Some(source_root) = &common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        if let Some(output) = &common_args.output {
            config.output = output.clone();
        }

        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let handlers = HandlerRegistry::from_config(&config.functions);
        if handlers.is_empty() && verbose {
            eprintln!("Note: no translation functions configured");
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            handlers,
            verbose,
        })
    }

    /// Run extraction over all files.
    ///
    /// Files are read, parsed, and walked in parallel, each into its own
    /// catalog and diagnostic collector. The per-file results are then
    /// absorbed sequentially in sorted path order, so the output does not
    /// depend on scheduling.
    pub fn extract(&self) -> ExtractionResult {
        let per_file: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| {
                let display_path = self.display_path(file_path);
                let mut collector = DiagnosticCollector::new();
                let result = fs::read_to_string(file_path)
                    .map_err(|e| anyhow!("Failed to read file: {}", e))
                    .and_then(|code| {
                        extract_source(
                            code,
                            &display_path,
                            &self.handlers,
                            &self.config.comment_marker,
                            &mut collector,
                        )
                    });
                (display_path, result, collector)
            })
            .collect();

        let mut extraction = ExtractionResult::default();
        for (file_path, result, collector) in per_file {
            match result {
                Ok(catalog) => {
                    extraction.catalog.absorb(catalog);
                    extraction.diagnostics.extend(collector.into_inner());
                    extraction.files_checked += 1;
                }
                Err(e) => {
                    if self.verbose {
                        eprintln!("Warning: {} - {}", file_path, e);
                    }
                    extraction.parse_failures.push(ParseFailure {
                        file_path,
                        error: e.to_string(),
                    });
                }
            }
        }

        extraction
    }

    /// Path of a scanned file relative to the root, with `/` separators.
    fn display_path(&self, file_path: &str) -> String {
        let path = Path::new(file_path);
        let relative = path.strip_prefix(&self.root_dir).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
