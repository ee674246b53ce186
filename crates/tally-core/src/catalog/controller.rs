//! The edit-workflow controller.
//!
//! `Catalog` is the single entry point the renderer talks to. It owns the
//! store and the (optional) edit session, and turns user intents into state
//! transitions. Every intent runs synchronously to completion; invalid
//! intents (saving with no dialog open, editing an unknown row) degrade to
//! no-ops rather than errors, and validation failures surface as flags on
//! the open session.

use tracing::debug;

use super::entry::{Entry, EntryId};
use super::session::{EditMode, EditSession, EditorField};
use super::store::{CatalogChange, CatalogStore, EntryRecord};
use super::validate::{FieldErrors, validate};

/// Result of a save intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft was valid and committed; the dialog closed.
    Saved(EntryId),
    /// Draft failed validation; the dialog stays open with these flags set.
    Invalid(FieldErrors),
    /// No dialog was open; nothing happened.
    NotOpen,
}

/// Catalog state machine: store + edit session.
#[derive(Debug, Default)]
pub struct Catalog {
    store: CatalogStore,
    session: Option<EditSession>,
}

impl Catalog {
    /// Creates a catalog seeded with `entries`. The session starts closed.
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            store: CatalogStore::with_entries(entries),
            session: None,
        }
    }

    pub fn entries(&self) -> &[EntryRecord] {
        self.store.entries()
    }

    /// Derived entry count, for the renderer's footer.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn mode(&self) -> EditMode {
        self.session
            .as_ref()
            .map_or(EditMode::Closed, EditSession::mode)
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Drains the store's change feed for the renderer.
    pub fn take_changes(&mut self) -> Vec<CatalogChange> {
        self.store.take_changes()
    }

    /// Opens the dialog for a new entry. No-op while a dialog is open.
    pub fn open_for_create(&mut self) {
        if self.session.is_some() {
            debug!("ignoring open_for_create, dialog already open");
            return;
        }
        self.session = Some(EditSession::creating());
    }

    /// Opens the dialog on a copy of the entry with `id`.
    ///
    /// No-op while a dialog is open or when `id` is unknown. Returns whether
    /// the dialog opened.
    pub fn open_for_edit(&mut self, id: EntryId) -> bool {
        if self.session.is_some() {
            debug!(%id, "ignoring open_for_edit, dialog already open");
            return false;
        }
        let Some(record) = self.store.get(id) else {
            debug!(%id, "ignoring open_for_edit, unknown entry");
            return false;
        };
        self.session = Some(EditSession::editing(id, &record.entry));
        true
    }

    /// Replaces the raw value of a form field. No-op while closed.
    pub fn change_field(&mut self, field: EditorField, value: String) {
        if let Some(session) = self.session.as_mut() {
            session.draft.set_field(field, value);
        }
    }

    /// Validates the draft and commits it if clean.
    ///
    /// On validation failure the session stays open in the same mode with
    /// its error flags set and the store untouched. On success the entry is
    /// committed in a single store mutation (upsert on name collision,
    /// create fallback if the edit target was deleted) and the dialog
    /// closes.
    pub fn save(&mut self) -> SaveOutcome {
        let Some(session) = self.session.as_mut() else {
            return SaveOutcome::NotOpen;
        };

        let candidate = session.draft.entry();
        let errors = validate(&candidate.name, candidate.price);
        if !errors.is_clean() {
            session.errors = errors;
            return SaveOutcome::Invalid(errors);
        }

        let origin = session.origin();
        let id = self.store.save(candidate, origin);
        self.session = None;
        SaveOutcome::Saved(id)
    }

    /// Closes the dialog, discarding the draft. Always safe; never touches
    /// the store. No-op while closed.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Deletes the row with `id`, independent of the dialog state.
    ///
    /// If that row is the one currently open for editing, the session is
    /// force-closed so the dialog cannot keep editing a gone entry. Returns
    /// whether a row was removed.
    pub fn delete_row(&mut self, id: EntryId) -> bool {
        let removed = self.store.delete(id);
        if removed && self.mode() == EditMode::Editing(id) {
            debug!(%id, "deleted the entry being edited, closing dialog");
            self.session = None;
        }
        removed
    }

    /// Deletes the row whose trimmed name matches, with the same
    /// force-close rule as [`delete_row`](Self::delete_row).
    pub fn delete_row_by_name(&mut self, name: &str) -> bool {
        match self.store.find_by_name(name) {
            Some(id) => self.delete_row(id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(pairs: &[(&str, f64)]) -> Catalog {
        Catalog::with_entries(pairs.iter().map(|(n, p)| Entry::new(*n, *p)))
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog
            .entries()
            .iter()
            .map(|record| record.entry.name.as_str())
            .collect()
    }

    #[test]
    fn scenario_a_create_with_colliding_name_upserts() {
        // seed [Shirt:10]; openForCreate; name=Shirt, price=20; save
        // => entries == [Shirt:20], mode == Closed.
        let mut catalog = seeded(&[("Shirt", 10.0)]);
        catalog.open_for_create();
        catalog.change_field(EditorField::Name, "Shirt".into());
        catalog.change_field(EditorField::Price, "20".into());

        let outcome = catalog.save();

        assert!(matches!(outcome, SaveOutcome::Saved(_)));
        assert_eq!(names(&catalog), ["Shirt"]);
        assert_eq!(catalog.entries()[0].entry.price, 20.0);
        assert_eq!(catalog.mode(), EditMode::Closed);
    }

    #[test]
    fn scenario_b_invalid_price_keeps_dialog_open_and_store_unchanged() {
        // seed [Shirt:10]; openForEdit(Shirt); price=0; save
        // => price_invalid, entries unchanged, still Editing(Shirt).
        let mut catalog = seeded(&[("Shirt", 10.0)]);
        let id = catalog.entries()[0].id;
        assert!(catalog.open_for_edit(id));
        catalog.change_field(EditorField::Price, "0".into());

        let outcome = catalog.save();

        let SaveOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid, got {outcome:?}");
        };
        assert!(errors.price_invalid);
        assert!(!errors.name_invalid);
        assert_eq!(catalog.entries()[0].entry.price, 10.0);
        assert_eq!(catalog.mode(), EditMode::Editing(id));
        assert!(catalog.session().unwrap().errors.price_invalid);
    }

    #[test]
    fn scenario_c_delete_row_by_name() {
        let mut catalog = seeded(&[("A", 5.0), ("B", 7.0)]);
        assert!(catalog.delete_row_by_name("A"));
        assert_eq!(names(&catalog), ["B"]);
        assert_eq!(catalog.entries()[0].entry.price, 7.0);
    }

    #[test]
    fn save_with_no_dialog_is_not_open() {
        let mut catalog = seeded(&[("A", 5.0)]);
        assert_eq!(catalog.save(), SaveOutcome::NotOpen);
        assert_eq!(names(&catalog), ["A"]);
    }

    #[test]
    fn failed_save_is_idempotent() {
        let mut catalog = seeded(&[("A", 5.0)]);
        catalog.open_for_create();
        catalog.change_field(EditorField::Price, "not a number".into());

        for _ in 0..3 {
            assert!(matches!(catalog.save(), SaveOutcome::Invalid(_)));
            assert_eq!(names(&catalog), ["A"]);
            assert_eq!(catalog.mode(), EditMode::Creating);
        }
    }

    #[test]
    fn errors_reflect_the_corrected_draft() {
        let mut catalog = Catalog::default();
        catalog.open_for_create();
        assert!(matches!(catalog.save(), SaveOutcome::Invalid(_)));
        let errors = catalog.session().unwrap().errors;
        assert!(errors.name_invalid && errors.price_invalid);

        catalog.change_field(EditorField::Name, "Shirt".into());
        assert!(matches!(catalog.save(), SaveOutcome::Invalid(_)));
        let errors = catalog.session().unwrap().errors;
        assert!(!errors.name_invalid && errors.price_invalid);

        catalog.change_field(EditorField::Price, "12.5".into());
        assert!(matches!(catalog.save(), SaveOutcome::Saved(_)));
        assert_eq!(catalog.count(), 1);
    }

    #[test]
    fn cancel_discards_the_draft_and_never_mutates_entries() {
        let mut catalog = seeded(&[("A", 5.0)]);
        let id = catalog.entries()[0].id;
        catalog.open_for_edit(id);
        catalog.change_field(EditorField::Name, "Changed".into());
        catalog.change_field(EditorField::Price, "99".into());

        catalog.cancel();

        assert_eq!(catalog.mode(), EditMode::Closed);
        assert_eq!(names(&catalog), ["A"]);
        assert_eq!(catalog.entries()[0].entry.price, 5.0);

        // Reopening starts from the stored entry, not the discarded draft.
        catalog.open_for_edit(id);
        assert_eq!(catalog.session().unwrap().draft.name, "A");
    }

    #[test]
    fn rename_keeps_identity_and_position() {
        let mut catalog = seeded(&[("A", 5.0), ("B", 7.0)]);
        let a = catalog.entries()[0].id;
        catalog.open_for_edit(a);
        catalog.change_field(EditorField::Name, "A renamed".into());

        let outcome = catalog.save();

        assert_eq!(outcome, SaveOutcome::Saved(a));
        assert_eq!(names(&catalog), ["A renamed", "B"]);
        assert_eq!(catalog.entries()[0].id, a);
    }

    #[test]
    fn stale_edit_target_falls_back_to_create() {
        let mut catalog = seeded(&[("A", 5.0)]);
        let a = catalog.entries()[0].id;
        catalog.open_for_edit(a);
        catalog.change_field(EditorField::Price, "6".into());

        // The target vanishes while the dialog is open. delete_row would
        // force-close the session, so remove it at the store level to model
        // an edit outliving its row.
        let session = catalog.session.take().unwrap();
        catalog.delete_row(a);
        catalog.session = Some(session);

        let outcome = catalog.save();

        let SaveOutcome::Saved(new_id) = outcome else {
            panic!("expected Saved, got {outcome:?}");
        };
        assert_ne!(new_id, a);
        assert_eq!(names(&catalog), ["A"]);
        assert_eq!(catalog.entries()[0].entry.price, 6.0);
    }

    #[test]
    fn deleting_the_edited_row_force_closes_the_dialog() {
        let mut catalog = seeded(&[("A", 5.0), ("B", 7.0)]);
        let a = catalog.entries()[0].id;
        catalog.open_for_edit(a);

        assert!(catalog.delete_row(a));

        assert_eq!(catalog.mode(), EditMode::Closed);
        assert_eq!(names(&catalog), ["B"]);
    }

    #[test]
    fn deleting_an_unrelated_row_keeps_the_dialog_open() {
        let mut catalog = seeded(&[("A", 5.0), ("B", 7.0)]);
        let a = catalog.entries()[0].id;
        let b = catalog.entries()[1].id;
        catalog.open_for_edit(a);

        assert!(catalog.delete_row(b));

        assert_eq!(catalog.mode(), EditMode::Editing(a));
    }

    #[test]
    fn open_intents_are_noops_while_a_dialog_is_open() {
        let mut catalog = seeded(&[("A", 5.0)]);
        let a = catalog.entries()[0].id;
        catalog.open_for_create();
        catalog.change_field(EditorField::Name, "draft".into());

        catalog.open_for_create();
        assert!(!catalog.open_for_edit(a));

        assert_eq!(catalog.mode(), EditMode::Creating);
        assert_eq!(catalog.session().unwrap().draft.name, "draft");
    }

    #[test]
    fn change_feed_reports_save_and_delete() {
        let mut catalog = seeded(&[("A", 5.0)]);
        let a = catalog.entries()[0].id;
        assert!(catalog.take_changes().is_empty());

        catalog.open_for_create();
        catalog.change_field(EditorField::Name, "B".into());
        catalog.change_field(EditorField::Price, "2".into());
        let SaveOutcome::Saved(b) = catalog.save() else {
            panic!("save failed");
        };
        catalog.delete_row(a);

        assert_eq!(
            catalog.take_changes(),
            [CatalogChange::Added(b), CatalogChange::Removed(a)]
        );
        assert!(catalog.take_changes().is_empty());
    }
}
