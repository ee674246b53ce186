//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::{config, logging};
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version = "0.1")]
#[command(about = "Terminal catalog editor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed file with initial entries (default: built-in seed)
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Write logs to this file (the TUI owns the terminal, so logs go to disk)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the seed entries as a table and exit
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The guard flushes buffered log lines on drop; keep it alive for the
    // whole run.
    let _log_guard = match cli.log_file.as_deref() {
        Some(path) => Some(logging::init_file_logging(path)?),
        None => None,
    };

    let entries = config::load_seed(cli.seed.as_deref()).context("load seed entries")?;
    info!(count = entries.len(), "seed loaded");

    match cli.command {
        Some(Commands::List) => commands::list(&entries),
        None => tally_tui::run_catalog_ui(entries),
    }
}
