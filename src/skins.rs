//! Avatar skins (glyph sets). Swapping a skin never touches game state.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSkin {
    #[default]
    Classic,
    Arrow,
    Block,
}

/// Rotation (radians) beyond which the avatar is drawn tilted.
const NOSE_UP_BELOW: f64 = -0.1;
const NOSE_DOWN_ABOVE: f64 = 0.6;

impl AvatarSkin {
    pub const ALL: [AvatarSkin; 3] = [AvatarSkin::Classic, AvatarSkin::Arrow, AvatarSkin::Block];

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Arrow => "Arrow",
            Self::Block => "Block",
        }
    }

    /// Next skin in display order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Glyphs as (nose up, level, nose down, dead).
    fn glyphs(self) -> [&'static str; 4] {
        match self {
            Self::Classic => ["▲", "►", "▼", "✖"],
            Self::Arrow => ["↗", "→", "↘", "x"],
            Self::Block => ["▀", "■", "▄", "□"],
        }
    }

    /// Glyph for the avatar's current tilt.
    pub fn glyph(self, rotation: f64, alive: bool) -> &'static str {
        let [up, level, down, dead] = self.glyphs();
        if !alive {
            dead
        } else if rotation < NOSE_UP_BELOW {
            up
        } else if rotation > NOSE_DOWN_ABOVE {
            down
        } else {
            level
        }
    }
}
