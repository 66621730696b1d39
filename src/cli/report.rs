//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow i18n-extract to be used as a library.
//! Everything here goes to stderr, so a catalog written to stdout stays clean.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, InitSummary, extract::STDOUT_OUTPUT,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ConsoleReporter, Diagnostic, Reporter};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            let skipped_calls = report_diagnostics(&result.diagnostics);
            print_extract_to(
                summary,
                result.source_files_checked,
                skipped_calls,
                &mut io::stderr().lock(),
            );
            if verbose && summary.output != STDOUT_OUTPUT {
                eprintln!("Catalog written to {}", summary.output);
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_failures.len(), verbose);
}

/// Replay collected diagnostics to the console, in file order.
///
/// Returns the number of diagnostics written.
pub fn report_diagnostics(diagnostics: &[Diagnostic]) -> usize {
    let mut reporter = ConsoleReporter::new();
    for diagnostic in diagnostics {
        reporter.report(&diagnostic.message, &diagnostic.location);
    }
    reporter.count()
}

/// Print the extraction summary to a custom writer.
pub fn print_extract_to<W: Write>(
    summary: &ExtractSummary,
    source_files: usize,
    skipped_calls: usize,
    writer: &mut W,
) {
    if skipped_calls > 0 {
        let _ = writeln!(
            writer,
            "{} {} call site(s) could not be extracted",
            "warning:".bold().yellow(),
            skipped_calls
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} source {}",
            summary.entry_count,
            if summary.entry_count == 1 { "entry" } else { "entries" },
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        eprintln!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
