//! Translation call handlers, one per call shape.
//!
//! Each handler validates the literal arguments of a recognized call, builds a
//! [`CatalogEntry`], and merges it into the catalog. Failures go to the
//! injected [`Reporter`] and leave the catalog untouched.
//!
//! | Handler | Default name | Arguments |
//! |---------|--------------|-----------|
//! | `SingleHandler` | `_t` | `(text, args?)` |
//! | `ContextHandler` | `_pt` | `(context, text, args?)` |
//! | `PluralHandler` | `_nt` | `(forms, factor, args?)` |
//! | `ContextPluralHandler` | `_npt` | `(context, forms, factor, args?)` |
//!
//! ## Module Structure
//!
//! - `args`: `CallArg` literal descriptors handed over by the driver
//! - `single`, `context`, `plural`: the handlers

mod args;
mod context;
mod plural;
mod single;

pub use args::CallArg;
pub use context::ContextHandler;
pub use plural::{ContextPluralHandler, PluralHandler};
pub use single::SingleHandler;

use std::{collections::HashMap, fmt};

use enum_dispatch::enum_dispatch;

use crate::config::FunctionsConfig;
use crate::core::catalog::{Catalog, CatalogEntry, EntryKind, IdentInfo};
use crate::core::diagnostics::Reporter;

/// Why a call site was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Shape error: the argument must be a string literal.
    NotStringLiteral { param: usize },
    /// Shape error: the argument must be an array of string literals.
    NotStringArray { param: usize },
    /// Shape error: the plural factor argument is missing.
    MissingFactor { param: usize },
    /// Shape error: the runtime arguments must be an array literal.
    NotArrayLiteral { param: usize },
    /// Numeric placeholders do not match the runtime arguments.
    ArgumentCountMismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotStringLiteral { param } => {
                write!(f, "parameter #{} should be a string literal", param)
            }
            Rejection::NotStringArray { param } => {
                write!(f, "parameter #{} should be an array of string literals", param)
            }
            Rejection::MissingFactor { param } => {
                write!(f, "parameter #{} (plural factor) is required", param)
            }
            Rejection::NotArrayLiteral { param } => {
                write!(f, "parameter #{} should be an array literal", param)
            }
            Rejection::ArgumentCountMismatch => f.write_str("optional arguments count mismatch"),
        }
    }
}

/// Common contract of all call-shape handlers.
#[enum_dispatch]
pub trait Handle {
    /// Kind of the entries this handler produces.
    fn kind(&self) -> EntryKind;

    /// Canonical callee name, used to prefix diagnostics.
    fn label(&self) -> &'static str;

    /// Validate the call's arguments and build its entry.
    fn build(
        &self,
        args: &[CallArg],
        ident: &IdentInfo,
        comments: &[String],
    ) -> Result<CatalogEntry, Rejection>;

    /// Build the entry and merge it, or report why the call site was skipped.
    fn handle(
        &self,
        catalog: &mut Catalog,
        args: &[CallArg],
        ident: &IdentInfo,
        comments: &[String],
        reporter: &mut dyn Reporter,
    ) {
        match self.build(args, ident, comments) {
            Ok(entry) => catalog.merge(entry),
            Err(rejection) => {
                reporter.report(&format!("{}: {}", self.label(), rejection), ident);
            }
        }
    }
}

/// The closed set of call shapes.
#[enum_dispatch(Handle)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Single(SingleHandler),
    Context(ContextHandler),
    Plural(PluralHandler),
    ContextPlural(ContextPluralHandler),
}

impl Handler {
    /// All handlers, in name-resolution priority order.
    pub fn all() -> [Handler; 4] {
        [
            Handler::Single(SingleHandler),
            Handler::Context(ContextHandler),
            Handler::Plural(PluralHandler),
            Handler::ContextPlural(ContextPluralHandler),
        ]
    }
}

/// Maps configured callee names to handlers.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    by_name: HashMap<String, Handler>,
}

impl HandlerRegistry {
    /// Build the registry from the configured function names.
    ///
    /// A name listed for several kinds resolves to the first kind in
    /// [`Handler::all`] order.
    pub fn from_config(functions: &FunctionsConfig) -> Self {
        let mut by_name = HashMap::new();
        for handler in Handler::all() {
            for name in functions.names_for(handler.kind()) {
                by_name.entry(name.clone()).or_insert(handler);
            }
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.by_name.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
