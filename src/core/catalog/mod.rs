//! The translation catalog: catalog keys mapped to extracted entries.
//!
//! ## Module Structure
//!
//! - `entry`: `CatalogEntry` and its parts (`IdentInfo`, `EntryKind`, `EntryText`)
//! - `key`: catalog key generation

mod entry;
mod key;

pub use entry::*;
pub use key::make_key;

use indexmap::{IndexMap, map::Entry};
use serde::Serialize;

/// Insertion-ordered map from catalog key to entry.
///
/// [`Catalog::merge`] is the only way entries get in. It never removes an
/// entry and never rewrites the kind, text, or context of an existing one.
/// Insertion order is kept so that serialized catalogs are deterministic.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an entry under its key.
    ///
    /// On a repeat key the incoming occurrences are appended (occurrences
    /// are a location log, so repeats are kept) and comments are unioned in
    /// first-seen order. Otherwise the entry is inserted as is.
    pub fn merge(&mut self, entry: CatalogEntry) {
        match self.entries.entry(make_key(&entry)) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                existing.add_comments(&entry.comments);
                existing.occurrences.extend(entry.occurrences);
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    /// Merge every entry of `other`, in its insertion order.
    pub fn absorb(&mut self, other: Catalog) {
        for entry in other.entries.into_values() {
            self.merge(entry);
        }
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}
