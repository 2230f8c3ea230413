//! Diagnostic logging
//!
//! Log output goes to a file in the config directory so it never draws over
//! the TUI. `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};

/// Build the filter from `RUST_LOG`, or from the configured level
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pocket_ledger={}", settings.log_level)))
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| LedgerError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to install logger: {}", e)))?;

    tracing::debug!(log_file = %paths.log_file().display(), "logging initialised");
    Ok(())
}
