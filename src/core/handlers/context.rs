use super::args::{RuntimeArgs, runtime_args_at, string_at};
use super::{CallArg, Handle, Rejection};
use crate::core::catalog::{CatalogEntry, EntryKind, IdentInfo};
use crate::core::placeholder::validate_placeholders;

/// Translation with disambiguating context: `_pt("context", "text", [args])`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextHandler;

impl Handle for ContextHandler {
    fn kind(&self) -> EntryKind {
        EntryKind::Context
    }

    fn label(&self) -> &'static str {
        "_pt"
    }

    fn build(
        &self,
        args: &[CallArg],
        ident: &IdentInfo,
        comments: &[String],
    ) -> Result<CatalogEntry, Rejection> {
        let context = string_at(args, 0).ok_or(Rejection::NotStringLiteral { param: 0 })?;
        let text = string_at(args, 1).ok_or(Rejection::NotStringLiteral { param: 1 })?;
        let runtime_args = match runtime_args_at(args, 2) {
            RuntimeArgs::Absent => None,
            RuntimeArgs::Present(elems) => Some(elems),
            RuntimeArgs::Invalid => return Err(Rejection::NotArrayLiteral { param: 2 }),
        };
        if !validate_placeholders(runtime_args, text) {
            return Err(Rejection::ArgumentCountMismatch);
        }

        Ok(CatalogEntry::new(
            EntryKind::Context,
            text.into(),
            Some(context.to_owned()),
            ident.clone(),
            comments,
        ))
    }
}
