//! UI event types.
//!
//! All inputs are converted to `UiEvent` before the reducer sees them.
//! There is no async work in this app, so the only sources are the terminal
//! and the runtime's tick timer.

use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (flash decay, animation cadence).
    Tick,
    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),
}
