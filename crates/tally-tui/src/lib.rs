//! Terminal UI for the Tally catalog editor.
//!
//! Elm-flavored architecture: `state` holds the data, `update` is the pure
//! reducer, `render` draws, and `runtime` owns the terminal and the event
//! loop. Overlays (the entry editor) live under `overlays`.

pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use anyhow::Result;
use tally_core::catalog::{Catalog, Entry};

use crate::runtime::TuiRuntime;

/// Runs the full-screen catalog editor over the given seed entries.
///
/// Blocks until the user quits. The terminal is restored on exit, panic
/// included.
///
/// # Errors
/// Returns an error if terminal setup or drawing fails.
pub fn run_catalog_ui(entries: Vec<Entry>) -> Result<()> {
    let mut runtime = TuiRuntime::new(Catalog::with_entries(entries))?;
    runtime.run()
}
