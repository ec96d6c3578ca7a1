//! Game entities: state, avatar, obstacles.

use crate::constants::{AVATAR_HITBOX_HEIGHT, AVATAR_HITBOX_WIDTH};

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Idle screen before the first run.
    #[default]
    Title,
    Playing,
    /// Motion frozen; next input restarts.
    Dead,
}

/// Axis-aligned rectangle in world units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Aabb {
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            left: cx - width / 2.0,
            top: cy - height / 2.0,
            right: cx + width / 2.0,
            bottom: cy + height / 2.0,
        }
    }

    /// Strict overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// The player's bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    /// Pinned horizontal position.
    pub x: f64,
    pub y: f64,
    /// Units/s, positive = downward.
    pub velocity_y: f64,
    /// Visual tilt in radians. Never read by physics.
    pub rotation: f64,
    pub alive: bool,
}

impl Avatar {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity_y: 0.0,
            rotation: 0.0,
            alive: true,
        }
    }

    /// Collision box, smaller than the drawn sprite.
    pub fn hitbox(&self) -> Aabb {
        Aabb::centered(self.x, self.y, AVATAR_HITBOX_WIDTH, AVATAR_HITBOX_HEIGHT)
    }
}

/// What an obstacle is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleRole {
    /// Background pipe on the title screen. Wraps instead of despawning,
    /// never scores, never collides.
    TitleDecoration,
    /// A real pipe pair. `scored` is shared by the top and bottom halves.
    Gameplay { scored: bool },
}

/// A pipe pair with a gap between the halves.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    pub gap_center_y: f64,
    pub gap_height: f64,
    pub role: ObstacleRole,
}

impl Obstacle {
    pub fn gameplay(x: f64, gap_top: f64, gap_height: f64) -> Self {
        Self {
            x,
            gap_center_y: gap_top + gap_height / 2.0,
            gap_height,
            role: ObstacleRole::Gameplay { scored: false },
        }
    }

    pub fn title_decoration(x: f64, gap_top: f64, gap_height: f64) -> Self {
        Self {
            x,
            gap_center_y: gap_top + gap_height / 2.0,
            gap_height,
            role: ObstacleRole::TitleDecoration,
        }
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_center_y - self.gap_height / 2.0
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_center_y + self.gap_height / 2.0
    }

    pub fn is_scored(&self) -> bool {
        matches!(self.role, ObstacleRole::Gameplay { scored: true })
    }

    pub fn is_gameplay(&self) -> bool {
        matches!(self.role, ObstacleRole::Gameplay { .. })
    }

    /// The two solid halves: field top to gap top, gap bottom to ground.
    pub fn solid_rects(&self, width: f64, ground_y: f64) -> [Aabb; 2] {
        let right = self.x + width;
        [
            Aabb {
                left: self.x,
                top: 0.0,
                right,
                bottom: self.gap_top(),
            },
            Aabb {
                left: self.x,
                top: self.gap_bottom(),
                right,
                bottom: ground_y,
            },
        ]
    }
}
