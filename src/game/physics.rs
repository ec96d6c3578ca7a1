//! Avatar motion as pure functions: each returns a new `Avatar`.

use super::types::Avatar;
use crate::constants::*;
use std::f64::consts::PI;

impl Avatar {
    /// One integration step: velocity then position.
    pub fn falling(self, gravity: f64, dt_secs: f64) -> Self {
        let velocity_y = self.velocity_y + gravity * dt_secs;
        Self {
            velocity_y,
            y: self.y + velocity_y * dt_secs,
            ..self
        }
    }

    /// Flap sets the velocity; it does not add to it.
    pub fn flapped(self, flap_velocity: f64) -> Self {
        Self {
            velocity_y: flap_velocity,
            rotation: ROTATION_ON_FLAP,
            ..self
        }
    }

    /// Ease rotation toward nose-down while falling fast, nose-up while
    /// rising fast. Unchanged in between.
    pub fn tilted(self) -> Self {
        let rotation = if self.velocity_y > ROTATION_FALL_THRESHOLD {
            (self.rotation + ROTATION_FALL_STEP).min(ROTATION_MAX_DOWN)
        } else if self.velocity_y < ROTATION_RISE_THRESHOLD {
            (self.rotation - ROTATION_RISE_STEP).max(ROTATION_MAX_UP)
        } else {
            self.rotation
        };
        Self { rotation, ..self }
    }

    pub fn pinned(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub fn killed(self) -> Self {
        Self {
            alive: false,
            rotation: ROTATION_ON_DEATH,
            ..self
        }
    }

    /// At rest with no tilt, as after a (re)start.
    pub fn stilled(self) -> Self {
        Self {
            velocity_y: 0.0,
            rotation: 0.0,
            alive: true,
            ..self
        }
    }
}

/// Upward offset of the idle float on the title screen: a sine ease-in-out
/// from 0 to the amplitude and back, one leg per half period.
pub fn title_float_offset(elapsed_secs: f64) -> f64 {
    let legs = elapsed_secs / TITLE_FLOAT_HALF_PERIOD_SECS;
    let phase = legs.rem_euclid(2.0);
    let progress = if phase <= 1.0 { phase } else { 2.0 - phase };
    TITLE_FLOAT_AMPLITUDE * 0.5 * (1.0 - (PI * progress).cos())
}
