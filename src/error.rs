//! Error types for the game.
//!
//! Nothing in here is fatal to a running session: callers in the game loop
//! log these and carry on without the side effect that failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlappyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, FlappyError>;
