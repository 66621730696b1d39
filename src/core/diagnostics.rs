//! Diagnostics for call sites that could not be extracted.
//!
//! A diagnostic never aborts extraction: the failing call site is skipped and
//! the walk continues. The reporter is passed in by the caller, so tests and
//! the parallel pipeline can collect diagnostics instead of printing them.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::catalog::IdentInfo;

/// Prefix printed before every diagnostic line.
pub const ERROR_PREFIX: &str = "[i18n-extract ERROR]";

/// Receives diagnostics for failed call sites.
pub trait Reporter {
    fn report(&mut self, message: &str, location: &IdentInfo);
}

impl<F> Reporter for F
where
    F: FnMut(&str, &IdentInfo),
{
    fn report(&mut self, message: &str, location: &IdentInfo) {
        self(message, location)
    }
}

/// A reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub location: IdentInfo,
}

/// Collects diagnostics in report order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for DiagnosticCollector {
    fn report(&mut self, message: &str, location: &IdentInfo) {
        self.diagnostics.push(Diagnostic {
            message: message.to_owned(),
            location: location.clone(),
        });
    }
}

/// Writes diagnostics to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    count: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics written so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, message: &str, location: &IdentInfo) {
        self.count += 1;
        write_diagnostic(message, location, &mut io::stderr().lock());
    }
}

/// Render one diagnostic: the message line followed by the location line.
pub fn write_diagnostic<W: Write>(message: &str, location: &IdentInfo, writer: &mut W) {
    let prefix = ERROR_PREFIX.red();
    let _ = writeln!(writer, "{} {}", prefix, message);
    let _ = writeln!(writer, "{} Location: {}", prefix, location);
}
