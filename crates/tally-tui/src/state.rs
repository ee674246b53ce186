//! Application state composition.
//!
//! State is split between `UiState` (list view, selection, core catalog)
//! and `Option<Overlay>` (the modal editor if open), combined in `AppState`.
//! The split lets overlay handlers take `&mut self` and `&mut UiState`
//! simultaneously without borrow conflicts.
//!
//! The catalog controller inside `UiState` is the source of truth for
//! entries and the edit session; everything else here is presentation
//! state the core does not know about (selection, row flashes, status
//! line).

use std::collections::HashMap;

use tally_core::catalog::{Catalog, CatalogChange, EntryId};

use crate::overlays::Overlay;

/// How many ticks a changed row stays highlighted.
pub const FLASH_TICKS: u8 = 6;

/// Combined application state for the TUI.
pub struct AppState {
    pub ui: UiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            ui: UiState::new(catalog),
            overlay: None,
        }
    }
}

/// Non-overlay UI state.
pub struct UiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The catalog state machine (entries + edit session).
    pub catalog: Catalog,
    /// Selected row index into `catalog.entries()`, clamped on mutation.
    pub selected: usize,
    /// Rows to highlight briefly, with remaining ticks. Fed by the core
    /// change feed; timing lives entirely here, not in the core.
    pub flashes: HashMap<EntryId, u8>,
    /// One-line feedback shown in the footer (last save/delete).
    pub status: Option<String>,
}

impl UiState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            should_quit: false,
            catalog,
            selected: 0,
            flashes: HashMap::new(),
            status: None,
        }
    }

    /// The id of the selected row, if any rows exist.
    pub fn selected_id(&self) -> Option<EntryId> {
        self.catalog.entries().get(self.selected).map(|r| r.id)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.catalog.count().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Drains the core change feed into the flash map and re-clamps the
    /// selection. Called after every reducer step so the list reacts to
    /// adds, updates, and removals no matter which intent caused them.
    pub fn absorb_changes(&mut self) {
        for change in self.catalog.take_changes() {
            match change {
                CatalogChange::Added(id) | CatalogChange::Updated(id) => {
                    self.flashes.insert(id, FLASH_TICKS);
                }
                CatalogChange::Removed(id) => {
                    self.flashes.remove(&id);
                }
            }
        }
        let last = self.catalog.count().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    /// Advances flash decay by one tick.
    pub fn tick_flashes(&mut self) {
        self.flashes.retain(|_, ticks| {
            *ticks = ticks.saturating_sub(1);
            *ticks > 0
        });
    }

    /// True while any row flash is still decaying (drives fast polling).
    pub fn has_active_flashes(&self) -> bool {
        !self.flashes.is_empty()
    }
}
