//! Non-interactive commands.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use tally_core::catalog::Entry;

/// Prints the entries as a table to stdout.
pub fn list(entries: &[Entry]) -> Result<()> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Name", "Price"]);
    for entry in entries {
        table.add_row([entry.name.clone(), format!("{:.2}", entry.price)]);
    }
    println!("{table}");
    println!("Total entries: {}", entries.len());
    Ok(())
}
