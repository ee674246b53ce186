//! Catalog state machine.
//!
//! This module owns the only non-trivial contract in Tally: how entries are
//! identified, validated, merged into the collection, and how the add/edit
//! dialog lifecycle is coordinated with it.
//!
//! - `entry`: the `Entry` value type and its surrogate `EntryId`
//! - `validate`: pure field validation
//! - `store`: the ordered collection with upsert-by-name merge semantics
//! - `session`: the transient draft state of the open dialog
//! - `controller`: glues user intents to session and store
//!
//! The renderer sits outside this module: it reads `Catalog` state, drains
//! the change feed, and raises intents. Nothing here touches a terminal.

pub mod controller;
pub mod entry;
pub mod session;
pub mod store;
pub mod validate;

pub use controller::{Catalog, SaveOutcome};
pub use entry::{Entry, EntryId};
pub use session::{Draft, EditMode, EditSession, EditorField};
pub use store::{CatalogChange, CatalogStore, EntryRecord};
pub use validate::{FieldErrors, validate};
