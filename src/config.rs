use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::catalog::EntryKind;

pub const CONFIG_FILE_NAME: &str = ".i18nextractrc.json";

/// Marker that turns a source comment into a translator comment: `//; note`.
pub const DEFAULT_COMMENT_MARKER: &str = ";";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
    #[serde(default)]
    pub functions: FunctionsConfig,
}

/// Callee names recognized as translation calls, per call shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionsConfig {
    #[serde(default = "default_single_functions")]
    pub single: Vec<String>,
    #[serde(default = "default_context_functions")]
    pub context: Vec<String>,
    #[serde(default = "default_plural_functions")]
    pub plural: Vec<String>,
    #[serde(default = "default_context_plural_functions")]
    pub context_plural: Vec<String>,
}

impl FunctionsConfig {
    pub fn names_for(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Single => &self.single,
            EntryKind::Context => &self.context,
            EntryKind::Plural => &self.plural,
            EntryKind::ContextPlural => &self.context_plural,
        }
    }
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            single: default_single_functions(),
            context: default_context_functions(),
            plural: default_plural_functions(),
            context_plural: default_context_plural_functions(),
        }
    }
}

fn default_single_functions() -> Vec<String> {
    vec!["_t".to_string()]
}

fn default_context_functions() -> Vec<String> {
    vec!["_pt".to_string()]
}

fn default_plural_functions() -> Vec<String> {
    vec!["_nt".to_string()]
}

fn default_context_plural_functions() -> Vec<String> {
    vec!["_npt".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_output() -> String {
    "./i18n/catalog.json".to_string()
}

fn default_comment_marker() -> String {
    DEFAULT_COMMENT_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
            output: default_output(),
            comment_marker: default_comment_marker(),
            functions: FunctionsConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is
    /// invalid, or if the comment marker is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.comment_marker.is_empty() {
            bail!("'commentMarker' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
