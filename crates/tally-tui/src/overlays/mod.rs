//! Modal overlays.
//!
//! Overlays temporarily take over keyboard input. Each is self-contained:
//! it owns its view state, key handler, and render function. The only
//! overlay today is the entry editor form; the enum shape leaves room for
//! more (a delete confirmation, say) without touching the reducer's
//! routing.

pub mod editor;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use editor::EditorState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::UiState;

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug)]
pub enum Overlay {
    Editor(EditorState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, ui: &UiState) {
        match self {
            Overlay::Editor(editor) => editor.render(frame, area, ui),
        }
    }

    pub fn handle_key(&mut self, ui: &mut UiState, key: KeyEvent) -> OverlayTransition {
        match self {
            Overlay::Editor(editor) => editor.handle_key(ui, key),
        }
    }
}

/// Convenience render helper for `Option<Overlay>`.
pub trait OverlayExt {
    fn render(&self, frame: &mut Frame, area: Rect, ui: &UiState);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, ui: &UiState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, ui);
        }
    }
}
