//! Flappy Bird core: entities, physics, spawning and the game session.
//!
//! The player steers a bird through scrolling pipe gaps by flapping.
//! Gravity pulls the bird down each tick; hitting a pipe, the ground or the
//! field bounds ends the run.

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod session;
pub mod spawner;
pub mod types;

pub use game_loop::{GameLoop, TickReport};
pub use input::{map_key, map_mouse, InputLatch, PlayerAction};
pub use session::GameSession;
pub use spawner::{ObstacleSpawner, SpawnTimer};
pub use types::{Aabb, Avatar, GameState, Obstacle, ObstacleRole};
