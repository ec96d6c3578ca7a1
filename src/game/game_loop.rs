//! Per-frame game loop interface.
//!
//! The front end calls `tick` once per rendered frame and reads the
//! returned `TickReport` to drive presentation (sounds, overlays). Nothing
//! in the report feeds back into the simulation.

use super::types::GameState;
use crate::audio::AudioCue;
use rand::Rng;
use std::time::Duration;

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Title → Playing this tick.
    pub started: bool,
    /// Dead → Playing this tick.
    pub restarted: bool,
    /// A flap was applied.
    pub flapped: bool,
    /// Obstacles passed this tick.
    pub points: u32,
    /// An obstacle was spawned.
    pub spawned: bool,
    /// Playing → Dead this tick.
    pub died: bool,
    /// The death also set a new best score.
    pub new_best: bool,
    /// Delayed death cue came due.
    pub death_cue: bool,
    /// Game-over panel became visible.
    pub game_over_shown: bool,
}

impl TickReport {
    /// Sound cues in the order they should play.
    pub fn cues(&self) -> Vec<AudioCue> {
        let mut cues = Vec::new();
        if self.started || self.restarted {
            cues.push(AudioCue::Swoosh);
        }
        if self.flapped {
            cues.push(AudioCue::Flap);
        }
        for _ in 0..self.points {
            cues.push(AudioCue::Score);
        }
        if self.died {
            cues.push(AudioCue::Hit);
        }
        if self.death_cue {
            cues.push(AudioCue::Death);
        }
        cues
    }
}

/// Core game loop - implemented by `GameSession`.
pub trait GameLoop {
    /// Latch an activate input for the next tick.
    fn activate(&mut self);

    /// Advance the game by one frame of `dt` wall-clock time.
    fn tick<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> TickReport;

    fn state(&self) -> GameState;
}
