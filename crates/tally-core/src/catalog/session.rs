//! Transient state of the add/edit dialog.
//!
//! A session exists only while the dialog is open. It owns its draft
//! exclusively: the draft is a value copy of the entry being edited (or an
//! empty form for a new one) and nothing is written to the store until a
//! valid save commits it wholesale.

use super::entry::{Entry, EntryId};
use super::validate::FieldErrors;

/// Dialog lifecycle state as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// No dialog open; the resting state.
    Closed,
    /// Dialog open for a new entry.
    Creating,
    /// Dialog open on an existing entry.
    Editing(EntryId),
}

/// The editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Name,
    Price,
}

/// The in-progress, uncommitted form contents.
///
/// Price is kept as the raw text the user typed; it is parsed only when the
/// draft is turned into a candidate entry. A string that does not parse
/// becomes a non-finite number for the validator to flag, never a hard
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub price_input: String,
}

impl Draft {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.name.clone(),
            price_input: format!("{}", entry.price),
        }
    }

    /// The candidate entry this draft describes.
    pub fn entry(&self) -> Entry {
        let price = self.price_input.trim().parse::<f64>().unwrap_or(f64::NAN);
        Entry::new(self.name.trim(), price)
    }

    pub fn field(&self, field: EditorField) -> &str {
        match field {
            EditorField::Name => &self.name,
            EditorField::Price => &self.price_input,
        }
    }

    pub fn set_field(&mut self, field: EditorField, value: String) {
        match field {
            EditorField::Name => self.name = value,
            EditorField::Price => self.price_input = value,
        }
    }
}

/// An open dialog: draft plus validation flags.
///
/// `origin` is the id the dialog was opened on (`None` for a new entry). The
/// target may be deleted while the dialog is open; the store's save fallback
/// handles that, the session does not care.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    origin: Option<EntryId>,
    pub draft: Draft,
    pub errors: FieldErrors,
}

impl EditSession {
    /// Opens a session for a new entry with an empty form.
    pub fn creating() -> Self {
        Self {
            origin: None,
            draft: Draft::default(),
            errors: FieldErrors::default(),
        }
    }

    /// Opens a session on a copy of `entry`.
    pub fn editing(id: EntryId, entry: &Entry) -> Self {
        Self {
            origin: Some(id),
            draft: Draft::from_entry(entry),
            errors: FieldErrors::default(),
        }
    }

    pub fn origin(&self) -> Option<EntryId> {
        self.origin
    }

    pub fn mode(&self) -> EditMode {
        match self.origin {
            Some(id) => EditMode::Editing(id),
            None => EditMode::Creating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_starts_with_empty_draft_and_clear_errors() {
        let session = EditSession::creating();
        assert_eq!(session.mode(), EditMode::Creating);
        assert_eq!(session.draft, Draft::default());
        assert!(session.errors.is_clean());
    }

    #[test]
    fn editing_copies_the_entry() {
        let entry = Entry::new("Shirt", 159.0);
        let session = EditSession::editing(EntryId::new(3), &entry);
        assert_eq!(session.mode(), EditMode::Editing(EntryId::new(3)));
        assert_eq!(session.draft.name, "Shirt");
        assert_eq!(session.draft.price_input, "159");
    }

    #[test]
    fn fractional_price_round_trips_through_the_draft() {
        let entry = Entry::new("Shirt", 19.9);
        let session = EditSession::editing(EntryId::new(0), &entry);
        assert_eq!(session.draft.price_input, "19.9");
        assert_eq!(session.draft.entry().price, 19.9);
    }

    #[test]
    fn unparseable_price_becomes_non_finite() {
        let mut draft = Draft::default();
        draft.set_field(EditorField::Name, "Shirt".into());
        draft.set_field(EditorField::Price, "abc".into());
        assert!(draft.entry().price.is_nan());
    }

    #[test]
    fn draft_entry_trims_the_name() {
        let mut draft = Draft::default();
        draft.set_field(EditorField::Name, "  Shirt  ".into());
        draft.set_field(EditorField::Price, "10".into());
        assert_eq!(draft.entry().name, "Shirt");
    }

    #[test]
    fn empty_price_input_is_non_finite() {
        assert!(Draft::default().entry().price.is_nan());
    }
}
