//! i18n-extract - translatable string extractor for JS/TS sources
//!
//! Walks JavaScript and TypeScript (including JSX/TSX) files, finds calls to
//! the configured translation functions (`_t`, `_pt`, `_nt`, `_npt`), validates
//! their literal arguments, and builds a deduplicated catalog of entries with
//! their occurrences and translator comments.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (catalog, handlers, AST walk, pipeline)

pub mod cli;
pub mod config;
pub mod core;
