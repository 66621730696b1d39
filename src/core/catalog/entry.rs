use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based position of a callee identifier.
///
/// `line` and `character` follow editor conventions (both start at 0).
/// Use the `Display` impl of [`IdentInfo`] for one-based output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub character: usize,
}

/// Where a translation call was found.
///
/// Created once per call-site visit and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentInfo {
    /// Path of the source file (as discovered by the scanner).
    pub file: String,
    pub location: Location,
}

impl IdentInfo {
    pub fn new(file: impl Into<String>, line: usize, character: usize) -> Self {
        Self {
            file: file.into(),
            location: Location { line, character },
        }
    }
}

impl fmt::Display for IdentInfo {
    /// Formats as `file:line:column` with one-based line and column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file,
            self.location.line + 1,
            self.location.character + 1
        )
    }
}

/// Call shape an entry was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Plain text: `_t("text", [args])`
    Single,
    /// Text with a disambiguating context: `_pt("context", "text", [args])`
    Context,
    /// Plural forms: `_nt(["one", "many"], factor, [args])`
    Plural,
    /// Plural forms with context: `_npt("context", ["one", "many"], factor, [args])`
    ContextPlural,
}

impl EntryKind {
    /// Tag used in serialized catalogs and in catalog keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Single => "single",
            EntryKind::Context => "context",
            EntryKind::Plural => "plural",
            EntryKind::ContextPlural => "context_plural",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The translatable source text of an entry.
///
/// Serialized untagged: a JSON string for plain shapes, an array of
/// strings (the plural forms, in source order) for plural shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryText {
    Single(String),
    Plural(Vec<String>),
}

impl EntryText {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            EntryText::Single(text) => Some(text),
            EntryText::Plural(_) => None,
        }
    }

    pub fn as_plural(&self) -> Option<&[String]> {
        match self {
            EntryText::Single(_) => None,
            EntryText::Plural(forms) => Some(forms),
        }
    }
}

impl From<&str> for EntryText {
    fn from(text: &str) -> Self {
        EntryText::Single(text.to_owned())
    }
}

/// One translatable unit in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub entry: EntryText,
    /// Present only for context-bearing shapes. `None` is distinct from `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Call sites in discovery order. Never empty for a stored entry.
    pub occurrences: Vec<IdentInfo>,
    /// Filled in by downstream translation tooling; always empty at extraction time.
    #[serde(default)]
    pub translations: Vec<String>,
    /// Translator comments, first-seen order, no duplicates.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl CatalogEntry {
    /// Build a freshly extracted entry for a single call site.
    pub fn new(
        kind: EntryKind,
        entry: EntryText,
        context: Option<String>,
        occurrence: IdentInfo,
        comments: &[String],
    ) -> Self {
        let mut this = Self {
            kind,
            entry,
            context,
            occurrences: vec![occurrence],
            translations: Vec::new(),
            comments: Vec::new(),
        };
        this.add_comments(comments);
        this
    }

    /// Append comments not already present, keeping first-seen order.
    pub fn add_comments<'a>(&mut self, comments: impl IntoIterator<Item = &'a String>) {
        for comment in comments {
            if !self.comments.contains(comment) {
                self.comments.push(comment.clone());
            }
        }
    }
}
