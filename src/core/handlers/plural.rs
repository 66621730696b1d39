//! Plural handlers.
//!
//! The plural factor (the runtime count) is always the argument right after
//! the forms. It fills placeholder `%1`; extra runtime arguments start at `%2`.

use super::args::{RuntimeArgs, runtime_args_at, string_at};
use super::{CallArg, Handle, Rejection};
use crate::core::catalog::{CatalogEntry, EntryKind, EntryText, IdentInfo};
use crate::core::placeholder::validate_plural_placeholders;

/// Plural translation: `_nt(["%1 item", "%1 items"], count, [args])`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluralHandler;

/// Plural translation with context: `_npt("context", ["%1 item", "%1 items"], count, [args])`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextPluralHandler;

impl Handle for PluralHandler {
    fn kind(&self) -> EntryKind {
        EntryKind::Plural
    }

    fn label(&self) -> &'static str {
        "_nt"
    }

    fn build(
        &self,
        args: &[CallArg],
        ident: &IdentInfo,
        comments: &[String],
    ) -> Result<CatalogEntry, Rejection> {
        let forms = plural_forms(args, 0)?;
        Ok(CatalogEntry::new(
            EntryKind::Plural,
            EntryText::Plural(forms),
            None,
            ident.clone(),
            comments,
        ))
    }
}

impl Handle for ContextPluralHandler {
    fn kind(&self) -> EntryKind {
        EntryKind::ContextPlural
    }

    fn label(&self) -> &'static str {
        "_npt"
    }

    fn build(
        &self,
        args: &[CallArg],
        ident: &IdentInfo,
        comments: &[String],
    ) -> Result<CatalogEntry, Rejection> {
        let context = string_at(args, 0).ok_or(Rejection::NotStringLiteral { param: 0 })?;
        let forms = plural_forms(args, 1)?;
        Ok(CatalogEntry::new(
            EntryKind::ContextPlural,
            EntryText::Plural(forms),
            Some(context.to_owned()),
            ident.clone(),
            comments,
        ))
    }
}

/// Validate `forms, factor, args?` starting at `first` and return the forms.
fn plural_forms(args: &[CallArg], first: usize) -> Result<Vec<String>, Rejection> {
    let forms = args
        .get(first)
        .and_then(CallArg::as_string_array)
        .ok_or(Rejection::NotStringArray { param: first })?;

    let factor = first + 1;
    if matches!(args.get(factor), None | Some(CallArg::Spread)) {
        return Err(Rejection::MissingFactor { param: factor });
    }

    let runtime_args = match runtime_args_at(args, factor + 1) {
        RuntimeArgs::Absent => None,
        RuntimeArgs::Present(elems) => Some(elems),
        RuntimeArgs::Invalid => return Err(Rejection::NotArrayLiteral { param: factor + 1 }),
    };
    if !validate_plural_placeholders(runtime_args, &forms) {
        return Err(Rejection::ArgumentCountMismatch);
    }
    Ok(forms)
}
