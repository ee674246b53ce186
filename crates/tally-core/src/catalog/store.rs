//! The ordered entry collection and its merge semantics.
//!
//! The store is the single owner of persisted entries. It is mutated exactly
//! once per committed save, never field-by-field, and every operation is
//! synchronous and total. Observers read the sequence immutably and drain a
//! change feed for presentation (row flashes etc.); the feed carries no
//! timing, only what changed.

use tracing::debug;

use super::entry::{Entry, EntryId};

/// One stored entry with its surrogate id.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    pub id: EntryId,
    pub entry: Entry,
}

/// Discrete change notification for observers.
///
/// Emitted by every store mutation and drained by the renderer via
/// [`CatalogStore::take_changes`]. Animation timing is the renderer's
/// business; the core only says what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogChange {
    Added(EntryId),
    Updated(EntryId),
    Removed(EntryId),
}

/// Insertion-ordered collection of catalog entries.
///
/// Invariants:
/// - at most one record per distinct trimmed name;
/// - an edited record keeps its position; a new record is appended;
/// - ids are never reused within a store.
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<EntryRecord>,
    next_id: u64,
    changes: Vec<CatalogChange>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `entries`, in order.
    ///
    /// Seeding goes through [`create`](Self::create), so duplicate names in
    /// the seed collapse via the same upsert rule as interactive saves
    /// (last one wins, first position kept). Seed changes are not reported
    /// as a change feed; the initial render is not an animation.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.create(entry);
        }
        store.changes.clear();
        store
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[EntryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&EntryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Looks up a record id by trimmed display name.
    pub fn find_by_name(&self, name: &str) -> Option<EntryId> {
        let name = name.trim();
        self.records
            .iter()
            .find(|record| record.entry.name == name)
            .map(|record| record.id)
    }

    /// Inserts `entry`, merging by name.
    ///
    /// Upsert-by-name: when a record with the same trimmed name exists, it
    /// is replaced in place (position and id preserved) instead of appending
    /// a duplicate. This mirrors how saving a "new" entry over an existing
    /// name behaves in the dialog and is a deliberate, tested policy.
    pub fn create(&mut self, mut entry: Entry) -> EntryId {
        entry.name = entry.name.trim().to_string();

        if let Some(existing) = self.find_by_name(&entry.name) {
            debug!(id = %existing, name = %entry.name, "create collided with existing name, upserting");
            return self.replace(existing, entry);
        }

        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        debug!(%id, name = %entry.name, "appending entry");
        self.records.push(EntryRecord { id, entry });
        self.changes.push(CatalogChange::Added(id));
        id
    }

    /// Replaces the record identified by `id` with `entry`, keeping its
    /// position. The name may change; if the new name now collides with a
    /// different record, that other record is dropped so name-uniqueness
    /// holds (the edited record wins).
    ///
    /// If `id` is gone (deleted between session-open and save), falls back
    /// to [`create`](Self::create) so the edit is not lost.
    pub fn update(&mut self, id: EntryId, mut entry: Entry) -> EntryId {
        entry.name = entry.name.trim().to_string();

        if self.get(id).is_none() {
            debug!(%id, "edit target no longer exists, saving as new entry");
            return self.create(entry);
        }

        if let Some(other) = self.find_by_name(&entry.name)
            && other != id
        {
            debug!(%id, displaced = %other, name = %entry.name, "rename collided, dropping displaced record");
            self.delete(other);
        }

        self.replace(id, entry)
    }

    /// Removes the record with `id`. No-op (not an error) when absent.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            return false;
        };
        debug!(%id, name = %self.records[index].entry.name, "removing entry");
        self.records.remove(index);
        self.changes.push(CatalogChange::Removed(id));
        true
    }

    /// Removes the record whose trimmed name matches. No-op when absent.
    pub fn delete_by_name(&mut self, name: &str) -> bool {
        match self.find_by_name(name) {
            Some(id) => self.delete(id),
            None => false,
        }
    }

    /// Single commit entry point used by the controller.
    ///
    /// `origin` is the id the edit session was opened on, or `None` when the
    /// dialog was opened for a new entry. Dispatches to update or create;
    /// both apply the upsert-by-name rule.
    pub fn save(&mut self, entry: Entry, origin: Option<EntryId>) -> EntryId {
        match origin {
            Some(id) => self.update(id, entry),
            None => self.create(entry),
        }
    }

    /// Drains the accumulated change feed.
    pub fn take_changes(&mut self) -> Vec<CatalogChange> {
        std::mem::take(&mut self.changes)
    }

    fn replace(&mut self, id: EntryId, entry: Entry) -> EntryId {
        if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
            record.entry = entry;
            self.changes.push(CatalogChange::Updated(id));
        }
        id
    }
}
