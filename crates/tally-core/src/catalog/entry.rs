//! Catalog entry value type.

use serde::{Deserialize, Serialize};

/// Surrogate identifier for a catalog entry.
///
/// Assigned by the store and stable across edits, including renames. The
/// display name carries no identity; two ids never compare equal for
/// different records even when their names collide transiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named, priced catalog item.
///
/// Plain value data: the store hands out copies, the edit session works on
/// copies, and commits replace stored values wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name. Stored trimmed; uniqueness within a store is enforced
    /// by the store's merge policy, not here.
    pub name: String,
    /// Unit price. Valid entries have a finite price greater than zero.
    pub price: f64,
}

impl Entry {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
