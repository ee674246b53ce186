//! TUI reducer.
//!
//! All state transitions happen here: the runtime calls `update(app, event)`
//! for every event and renders afterwards. Keys route to the open overlay
//! first; with no overlay, they act on the list. After every event the core
//! change feed is absorbed so the list reflects mutations immediately.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tally_core::catalog::EntryId;

use crate::events::UiEvent;
use crate::overlays::{EditorState, Overlay, OverlayTransition};
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) {
    match event {
        UiEvent::Tick => {
            app.ui.tick_flashes();
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind != KeyEventKind::Release => {
            handle_key(app, key);
        }
        // Resize needs no state change; the next draw reflows. Everything
        // else (focus, mouse) is ignored.
        UiEvent::Terminal(_) => {}
    }
    app.ui.absorb_changes();
}

fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Dispatch to the active overlay first: it owns the keyboard while open.
    if let Some(overlay) = app.overlay.as_mut() {
        if overlay.handle_key(&mut app.ui, key) == OverlayTransition::Close {
            app.overlay = None;
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.ui.should_quit = true;
        }
        KeyCode::Char('c') if ctrl => {
            app.ui.should_quit = true;
        }
        KeyCode::Up | KeyCode::Char('k') => app.ui.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.ui.select_next(),
        KeyCode::Char('n' | 'a') => {
            app.ui.catalog.open_for_create();
            app.overlay = Some(Overlay::Editor(EditorState::open()));
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = app.ui.selected_id()
                && app.ui.catalog.open_for_edit(id)
            {
                app.overlay = Some(Overlay::Editor(EditorState::open()));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.ui.selected_id() {
                delete_row(app, id);
            }
        }
        _ => {}
    }
}

fn delete_row(app: &mut AppState, id: EntryId) {
    let name = app
        .ui
        .catalog
        .store()
        .get(id)
        .map(|record| record.entry.name.clone());
    if app.ui.catalog.delete_row(id)
        && let Some(name) = name
    {
        app.ui.status = Some(format!("Deleted \"{name}\""));
    }
}
