//! Diagnostic logging
//!
//! The TUI owns the terminal, so tracing output goes to a log file in the
//! config directory. The filter comes from `POCKET_LOG` and defaults to
//! `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "POCKET_LOG";

/// Install a global subscriber that appends to the log file
pub fn init_logging(paths: &LedgerPaths) -> LedgerResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            LedgerError::Io(format!("Failed to open log file {}: {}", log_path.display(), e))
        })?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
