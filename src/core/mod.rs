//! Extraction engine.
//!
//! ## Pipeline
//!
//! 1. **Scan**: `file_scanner` discovers source files under the source root
//! 2. **Extract**: each file is parsed and walked in parallel, building its own
//!    [`Catalog`] and collecting diagnostics
//! 3. **Reduce**: per-file catalogs are absorbed in sorted file order
//!
//! ## Module Structure
//!
//! - `catalog`: entries, keys, and the merge semantics
//! - `context`: pipeline orchestration ([`ExtractContext`])
//! - `diagnostics`: [`Reporter`] and its implementations
//! - `extract`: per-file AST walk
//! - `handlers`: one handler per call shape
//! - `placeholder`: `%N` placeholder validation

pub mod catalog;
pub mod context;
pub mod diagnostics;
pub mod extract;
pub mod file_scanner;
pub mod handlers;
pub mod parsers;
pub mod placeholder;

pub use catalog::{Catalog, CatalogEntry, EntryKind, EntryText, IdentInfo, Location, make_key};
pub use context::{ExtractContext, ExtractionResult, ParseFailure};
pub use diagnostics::{ConsoleReporter, Diagnostic, DiagnosticCollector, Reporter};
pub use handlers::{CallArg, Handle, Handler, HandlerRegistry, Rejection};
