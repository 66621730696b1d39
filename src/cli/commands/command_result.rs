use super::super::exit_status::ExitStatus;
use crate::core::{Diagnostic, ParseFailure};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub entry_count: usize,
    /// Where the catalog went: a file path, or `-` for stdout.
    pub output: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running i18n-extract commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Call sites that were skipped, in file order.
    pub diagnostics: Vec<Diagnostic>,
    /// Files that could not be read or parsed.
    pub parse_failures: Vec<ParseFailure>,
    /// Number of source files that were extracted.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ if !self.diagnostics.is_empty() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
