//! Catalog key generation.
//!
//! Keys are opaque, deterministic, and injective over `(kind, entry, context)`.
//! Plain entries without context are keyed by their own text, which keeps
//! serialized catalogs readable; every other entry carries its kind tag.
//!
//! Layout (`EOT` is U+0004, `NUL` is U+0000):
//!
//! ```text
//! single, no context:  text
//! anything else:       kind EOT text [EOT context]
//! plural text:         NUL form NUL form ... NUL
//! ```
//!
//! Components are escaped so they never contain `EOT` or `NUL`.

use super::{CatalogEntry, EntryKind, EntryText};

const FIELD_SEPARATOR: char = '\u{4}';
const FORM_SEPARATOR: char = '\u{0}';

/// Compute the catalog key for an entry.
pub fn make_key(entry: &CatalogEntry) -> String {
    let text = encode_text(&entry.entry);

    if entry.kind == EntryKind::Single && entry.context.is_none() {
        return text;
    }

    let mut key = String::with_capacity(text.len() + 16);
    key.push_str(entry.kind.as_str());
    key.push(FIELD_SEPARATOR);
    key.push_str(&text);
    if let Some(context) = &entry.context {
        key.push(FIELD_SEPARATOR);
        key.push_str(&escape(context));
    }
    key
}

fn encode_text(text: &EntryText) -> String {
    match text {
        EntryText::Single(text) => escape(text),
        EntryText::Plural(forms) => {
            let mut out = String::new();
            for form in forms {
                out.push(FORM_SEPARATOR);
                out.push_str(&escape(form));
            }
            out.push(FORM_SEPARATOR);
            out
        }
    }
}

fn escape(value: &str) -> String {
    if !value.contains(['\\', FIELD_SEPARATOR, FORM_SEPARATOR]) {
        return value.to_owned();
    }
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            FIELD_SEPARATOR => out.push_str("\\4"),
            FORM_SEPARATOR => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out
}
