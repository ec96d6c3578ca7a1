//! Obstacle spawning on a fixed cadence.

use super::types::Obstacle;
use crate::config::ObstacleConfig;
use rand::Rng;
use std::time::Duration;

/// A cancellable periodic task driven by session time.
///
/// `start` always replaces the previous schedule, so restarting never stacks
/// two cadences. Each start bumps `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimer {
    period: Duration,
    next_due: Option<Duration>,
    generation: u64,
}

impl SpawnTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            generation: 0,
        }
    }

    /// Arm the timer; first firing is one period after `now`.
    pub fn start(&mut self, now: Duration) {
        self.generation += 1;
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// True if the timer fired at or before `now`. Missed periods after a
    /// stall collapse into one firing so pipes never stack.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(mut due) = self.next_due else {
            return false;
        };
        if due > now {
            return false;
        }
        while due <= now {
            due += self.period;
        }
        self.next_due = Some(due);
        true
    }
}

/// Builds gameplay obstacles at the right edge with a random gap.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleSpawner {
    spawn_x: f64,
    gap_height: f64,
    gap_top_min: u32,
    gap_top_max: u32,
}

impl ObstacleSpawner {
    pub fn new(config: &ObstacleConfig) -> Self {
        Self {
            spawn_x: config.spawn_x,
            gap_height: config.gap_height,
            gap_top_min: config.gap_top_min,
            gap_top_max: config.gap_top_max.max(config.gap_top_min),
        }
    }

    pub fn spawn<R: Rng>(&self, rng: &mut R) -> Obstacle {
        let gap_top = rng.gen_range(self.gap_top_min..=self.gap_top_max);
        Obstacle::gameplay(self.spawn_x, gap_top as f64, self.gap_height)
    }
}
