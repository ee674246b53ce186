//! Entry editor overlay (the add/edit form).
//!
//! The overlay owns only view state: which field has focus. Field values
//! and validation flags live in the core edit session; every keystroke is
//! forwarded as a `change_field` intent and Enter raises `save`. Invalid
//! input keeps the form open with inline errors — the terminal failure
//! path for bad input, not an error condition.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use tally_core::catalog::{EditMode, EditorField, SaveOutcome};

use super::OverlayTransition;
use super::render_utils::{
    FormRow, InputHint, popup_area, render_container, render_form_row, render_hints,
};
use crate::state::UiState;

const OVERLAY_WIDTH: u16 = 44;
const OVERLAY_HEIGHT: u16 = 11;

const NAME_ERROR: &str = "Name is required";
const PRICE_ERROR: &str = "Price must be a number greater than 0";

/// View state for the editor overlay.
#[derive(Debug)]
pub struct EditorState {
    focus: EditorField,
}

impl EditorState {
    /// Opens the form with focus on the name field. The caller must have
    /// opened the core session first; the overlay only mirrors it.
    pub fn open() -> Self {
        Self {
            focus: EditorField::Name,
        }
    }

    pub fn handle_key(&mut self, ui: &mut UiState, key: KeyEvent) -> OverlayTransition {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                ui.catalog.cancel();
                OverlayTransition::Close
            }
            KeyCode::Char('c') if ctrl => {
                ui.catalog.cancel();
                OverlayTransition::Close
            }
            KeyCode::Enter => match ui.catalog.save() {
                SaveOutcome::Saved(id) => {
                    let name = ui
                        .catalog
                        .store()
                        .get(id)
                        .map(|record| record.entry.name.clone())
                        .unwrap_or_default();
                    ui.status = Some(format!("Saved \"{name}\""));
                    OverlayTransition::Close
                }
                // Errors are now set on the session; the next render shows
                // them inline under the fields.
                SaveOutcome::Invalid(_) => OverlayTransition::Stay,
                SaveOutcome::NotOpen => OverlayTransition::Close,
            },
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.focus = next_field(self.focus);
                OverlayTransition::Stay
            }
            KeyCode::Backspace => {
                self.edit_focused(ui, |value| {
                    value.pop();
                });
                OverlayTransition::Stay
            }
            KeyCode::Char(c) if !ctrl => {
                self.edit_focused(ui, |value| value.push(c));
                OverlayTransition::Stay
            }
            _ => OverlayTransition::Stay,
        }
    }

    /// Applies `edit` to a copy of the focused field's raw text and raises
    /// the change intent with the result.
    fn edit_focused(&self, ui: &mut UiState, edit: impl FnOnce(&mut String)) {
        let Some(session) = ui.catalog.session() else {
            return;
        };
        let mut value = session.draft.field(self.focus).to_string();
        edit(&mut value);
        ui.catalog.change_field(self.focus, value);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ui: &UiState) {
        let Some(session) = ui.catalog.session() else {
            return;
        };

        let title = match ui.catalog.mode() {
            EditMode::Editing(_) => "Edit Entry",
            _ => "Add Entry",
        };
        let popup = popup_area(area, OVERLAY_WIDTH, OVERLAY_HEIGHT);
        let body = render_container(frame, popup, title, Color::Cyan);

        render_form_row(
            frame,
            body,
            0,
            &FormRow {
                label: "Name",
                value: &session.draft.name,
                focused: self.focus == EditorField::Name,
                error: session.errors.name_invalid.then_some(NAME_ERROR),
            },
        );
        render_form_row(
            frame,
            body,
            3,
            &FormRow {
                label: "Price",
                value: &session.draft.price_input,
                focused: self.focus == EditorField::Price,
                error: session.errors.price_invalid.then_some(PRICE_ERROR),
            },
        );

        let hints = [
            InputHint {
                key: "Enter",
                action: "save",
            },
            InputHint {
                key: "Tab",
                action: "field",
            },
            InputHint {
                key: "Esc",
                action: "cancel",
            },
        ];
        render_hints(frame, body, &hints, Color::Cyan);
    }
}

/// Two fields, so forward and backward cycling coincide.
fn next_field(field: EditorField) -> EditorField {
    match field {
        EditorField::Name => EditorField::Price,
        EditorField::Price => EditorField::Name,
    }
}

#[cfg(test)]
mod tests {
    use tally_core::catalog::{Catalog, Entry};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_create(pairs: &[(&str, f64)]) -> (EditorState, UiState) {
        let mut ui = UiState::new(Catalog::with_entries(
            pairs.iter().map(|(n, p)| Entry::new(*n, *p)),
        ));
        ui.catalog.open_for_create();
        (EditorState::open(), ui)
    }

    fn type_text(editor: &mut EditorState, ui: &mut UiState, text: &str) {
        for c in text.chars() {
            editor.handle_key(ui, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let (mut editor, mut ui) = open_create(&[]);
        type_text(&mut editor, &mut ui, "Mug");
        editor.handle_key(&mut ui, key(KeyCode::Tab));
        type_text(&mut editor, &mut ui, "4.5");

        let draft = &ui.catalog.session().unwrap().draft;
        assert_eq!(draft.name, "Mug");
        assert_eq!(draft.price_input, "4.5");
    }

    #[test]
    fn backspace_removes_from_the_focused_field() {
        let (mut editor, mut ui) = open_create(&[]);
        type_text(&mut editor, &mut ui, "Mugs");
        editor.handle_key(&mut ui, key(KeyCode::Backspace));
        assert_eq!(ui.catalog.session().unwrap().draft.name, "Mug");
    }

    #[test]
    fn enter_with_valid_draft_saves_and_closes() {
        let (mut editor, mut ui) = open_create(&[]);
        type_text(&mut editor, &mut ui, "Mug");
        editor.handle_key(&mut ui, key(KeyCode::Tab));
        type_text(&mut editor, &mut ui, "4.5");

        let transition = editor.handle_key(&mut ui, key(KeyCode::Enter));

        assert_eq!(transition, OverlayTransition::Close);
        assert_eq!(ui.catalog.count(), 1);
        assert_eq!(ui.status.as_deref(), Some("Saved \"Mug\""));
    }

    #[test]
    fn enter_with_invalid_draft_stays_open() {
        let (mut editor, mut ui) = open_create(&[("A", 1.0)]);

        let transition = editor.handle_key(&mut ui, key(KeyCode::Enter));

        assert_eq!(transition, OverlayTransition::Stay);
        assert!(ui.catalog.is_open());
        assert_eq!(ui.catalog.count(), 1);
        let errors = ui.catalog.session().unwrap().errors;
        assert!(errors.name_invalid && errors.price_invalid);
    }

    #[test]
    fn esc_cancels_without_touching_the_store() {
        let (mut editor, mut ui) = open_create(&[("A", 1.0)]);
        type_text(&mut editor, &mut ui, "Discarded");

        let transition = editor.handle_key(&mut ui, key(KeyCode::Esc));

        assert_eq!(transition, OverlayTransition::Close);
        assert!(!ui.catalog.is_open());
        assert_eq!(ui.catalog.count(), 1);
        assert_eq!(ui.catalog.entries()[0].entry.name, "A");
    }

    #[test]
    fn focus_cycles_between_the_two_fields() {
        let (mut editor, mut ui) = open_create(&[]);
        assert_eq!(editor.focus, EditorField::Name);
        editor.handle_key(&mut ui, key(KeyCode::Down));
        assert_eq!(editor.focus, EditorField::Price);
        editor.handle_key(&mut ui, key(KeyCode::Up));
        assert_eq!(editor.focus, EditorField::Name);
    }
}
