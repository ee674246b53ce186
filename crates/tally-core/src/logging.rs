//! Debug logging setup.
//!
//! The TUI runs on the alternate screen, so stderr is not a usable log
//! destination while it is up. Logging is therefore opt-in and file-based:
//! `--log-file <path>` wires tracing through a non-blocking appender.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging.
///
/// The filter honors `RUST_LOG` and defaults to `info`. Returns the worker
/// guard; dropping it flushes buffered log lines, so the caller must hold it
/// for the lifetime of the process.
pub fn init_file_logging(path: &Path) -> Result<WorkerGuard> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
