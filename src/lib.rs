//! Flappy - Terminal Flappy Bird Library
//!
//! This module exposes the game core for testing and for the binary's
//! terminal front end.

pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod logging;
pub mod score;
pub mod skins;
pub mod utils;

pub use config::GameConfig;
pub use constants::*;
pub use error::{FlappyError, Result};
pub use game::{GameLoop, GameSession, GameState, TickReport};
