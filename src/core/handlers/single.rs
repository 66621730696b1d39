use super::args::{RuntimeArgs, runtime_args_at, string_at};
use super::{CallArg, Handle, Rejection};
use crate::core::catalog::{CatalogEntry, EntryKind, IdentInfo};
use crate::core::placeholder::validate_placeholders;

/// Plain translation: `_t("text", [args])`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleHandler;

impl Handle for SingleHandler {
    fn kind(&self) -> EntryKind {
        EntryKind::Single
    }

    fn label(&self) -> &'static str {
        "_t"
    }

    fn build(
        &self,
        args: &[CallArg],
        ident: &IdentInfo,
        comments: &[String],
    ) -> Result<CatalogEntry, Rejection> {
        let text = string_at(args, 0).ok_or(Rejection::NotStringLiteral { param: 0 })?;
        let runtime_args = match runtime_args_at(args, 1) {
            RuntimeArgs::Absent => None,
            RuntimeArgs::Present(elems) => Some(elems),
            RuntimeArgs::Invalid => return Err(Rejection::NotArrayLiteral { param: 1 }),
        };
        if !validate_placeholders(runtime_args, text) {
            return Err(Rejection::ArgumentCountMismatch);
        }

        Ok(CatalogEntry::new(
            EntryKind::Single,
            text.into(),
            None,
            ident.clone(),
            comments,
        ))
    }
}
