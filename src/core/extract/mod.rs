//! Per-file extraction: parse, index translator comments, walk the AST.
//!
//! ## Module Structure
//!
//! - `comments`: translator comment index
//! - `file_extractor`: the AST visitor that dispatches calls to handlers

pub mod comments;
pub mod file_extractor;

pub use comments::TranslatorComments;
pub use file_extractor::FileExtractor;

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;

use crate::core::catalog::Catalog;
use crate::core::diagnostics::Reporter;
use crate::core::handlers::HandlerRegistry;
use crate::core::parsers::jsx::parse_jsx_source;

/// Extract the catalog of one source file.
///
/// Failed call sites go to `reporter`; only a parse failure is an error.
pub fn extract_source(
    code: String,
    file_path: &str,
    handlers: &HandlerRegistry,
    comment_marker: &str,
    reporter: &mut dyn Reporter,
) -> Result<Catalog> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_jsx_source(code, file_path, source_map)?;
    let comments = TranslatorComments::collect(&parsed.comments, &parsed.source_map, comment_marker);

    let extractor = FileExtractor::new(
        file_path,
        &parsed.source_map,
        handlers,
        &comments,
        reporter,
    );
    Ok(extractor.extract(&parsed.module))
}
