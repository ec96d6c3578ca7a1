//! Tracing setup. The terminal belongs to the game, so logs go to a file.

use crate::constants::LOG_FILE_NAME;
use crate::error::{FlappyError, Result};
use crate::utils::persistence::data_path;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "flappy=info";

/// Default log location: `~/.flappy/flappy.log`.
pub fn default_log_path() -> Result<PathBuf> {
    data_path(LOG_FILE_NAME)
}

/// Install the global subscriber, appending to `path`. `RUST_LOG` overrides
/// the default filter.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| FlappyError::Logging(e.to_string()))
}
