//! Seed catalog loading.
//!
//! The seed is the only "persisted" artifact: a constant bootstrap list of
//! entries, either embedded in the binary or read from a TOML file passed on
//! the command line. Catalog mutations are never written back.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::catalog::{Entry, validate};

/// Embedded default seed, compiled in from `default_seed.toml`.
fn default_seed_toml() -> &'static str {
    include_str!("../default_seed.toml")
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

/// Loads the startup catalog.
///
/// With `path` given, reads and parses that file; otherwise uses the
/// embedded default seed. Entries that fail field validation are skipped
/// with a warning rather than aborting startup; duplicate names are left
/// for the store to collapse (same upsert rule as interactive saves).
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Entry>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?,
        None => default_seed_toml().to_string(),
    };
    let file: SeedFile = toml::from_str(&raw).with_context(|| match path {
        Some(path) => format!("Failed to parse seed file {}", path.display()),
        None => "Failed to parse embedded default seed".to_string(),
    })?;

    let mut entries = Vec::with_capacity(file.entries.len());
    for entry in file.entries {
        let errors = validate(&entry.name, entry.price);
        if errors.is_clean() {
            entries.push(entry);
        } else {
            warn!(name = %entry.name, price = entry.price, "skipping invalid seed entry");
        }
    }
    Ok(entries)
}
