//! Game tunables, loaded from `~/.flappy/config.toml`.
//!
//! Every field has a default equal to the reference tuning, so a partial
//! file only overrides what it names. A bad file never stops the game: the
//! caller gets defaults and a warning in the log.

use crate::constants::*;
use crate::error::{FlappyError, Result};
use crate::skins::AvatarSkin;
use crate::utils::persistence::data_path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Avatar motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in units/s².
    pub gravity: f64,
    /// Vertical velocity set by a flap, units/s (negative = upward).
    pub flap_velocity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
        }
    }
}

/// Obstacle spawning, motion and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub spawn_interval_ms: u64,
    pub spawn_x: f64,
    pub width: f64,
    pub gap_height: f64,
    /// Inclusive range for the top edge of a spawned gap.
    pub gap_top_min: u32,
    pub gap_top_max: u32,
    pub speed_per_tick: f64,
    /// How far past an obstacle's x the avatar must be to score it.
    pub score_offset: f64,
    pub despawn_x: f64,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_x: SPAWN_X,
            width: PIPE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: GAP_TOP_MAX,
            speed_per_tick: PIPE_SPEED_PER_TICK,
            score_offset: SCORE_OFFSET,
            despawn_x: DESPAWN_X,
        }
    }
}

impl ObstacleConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }
}

/// Play-field geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub avatar_x: f64,
    pub avatar_start_y: f64,
    pub lower_bound_y: f64,
    pub upper_bound_y: f64,
    pub ground_y: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            avatar_x: AVATAR_X,
            avatar_start_y: AVATAR_START_Y,
            lower_bound_y: LOWER_BOUND_Y,
            upper_bound_y: UPPER_BOUND_Y,
            ground_y: GROUND_Y,
        }
    }
}

/// Sound cue toggles. Purely presentational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub muted: bool,
    pub flap: bool,
    pub score: bool,
    pub hit: bool,
    pub death: bool,
    pub swoosh: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            muted: false,
            flap: false,
            score: true,
            hit: true,
            death: false,
            swoosh: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub obstacles: ObstacleConfig,
    pub field: FieldConfig,
    pub audio: AudioConfig,
    pub skin: AvatarSkin,
}

impl GameConfig {
    /// Default location: `~/.flappy/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        data_path(CONFIG_FILE_NAME)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` (or the default location), falling back to defaults
    /// on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!("config location unavailable, using defaults: {e}");
                    return Self::default();
                }
            },
        };
        match Self::load(&resolved) {
            Ok(config) => {
                tracing::debug!(path = %resolved.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(path = %resolved.display(), "ignoring config: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(FlappyError::InvalidConfig(msg.to_string()));

        if !(self.physics.gravity.is_finite() && self.physics.gravity > 0.0) {
            return invalid("physics.gravity must be positive");
        }
        if !(self.physics.flap_velocity.is_finite() && self.physics.flap_velocity < 0.0) {
            return invalid("physics.flap_velocity must be negative (upward)");
        }
        let o = &self.obstacles;
        let f = &self.field;
        let finite = [
            ("obstacles.spawn_x", o.spawn_x),
            ("obstacles.width", o.width),
            ("obstacles.gap_height", o.gap_height),
            ("obstacles.speed_per_tick", o.speed_per_tick),
            ("obstacles.score_offset", o.score_offset),
            ("obstacles.despawn_x", o.despawn_x),
            ("field.avatar_x", f.avatar_x),
            ("field.avatar_start_y", f.avatar_start_y),
            ("field.lower_bound_y", f.lower_bound_y),
            ("field.upper_bound_y", f.upper_bound_y),
            ("field.ground_y", f.ground_y),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FlappyError::InvalidConfig(format!("{name} must be a finite number")));
        }
        if o.spawn_interval_ms == 0 {
            return invalid("obstacles.spawn_interval_ms must be non-zero");
        }
        if o.gap_top_min > o.gap_top_max {
            return invalid("obstacles.gap_top_min must not exceed gap_top_max");
        }
        if o.gap_height <= 0.0 || o.width <= 0.0 || o.speed_per_tick <= 0.0 {
            return invalid("obstacle gap_height, width and speed_per_tick must be positive");
        }
        if o.despawn_x >= f.avatar_x {
            return invalid("obstacles.despawn_x must be behind the avatar");
        }
        if f.lower_bound_y <= f.upper_bound_y {
            return invalid("field.lower_bound_y must be below field.upper_bound_y");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.physics.gravity, 1200.0);
        assert_eq!(config.physics.flap_velocity, -420.0);
        assert_eq!(config.obstacles.spawn_interval_ms, 1800);
        assert_eq!(config.obstacles.gap_height, 130.0);
        assert_eq!(config.obstacles.gap_top_min, 80);
        assert_eq!(config.obstacles.gap_top_max, 400);
        assert_eq!(config.field.avatar_x, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config = GameConfig::from_toml_str(
            r#"
            skin = "arrow"

            [physics]
            gravity = 900.0
            "#,
        )
        .unwrap();
        assert_eq!(config.physics.gravity, 900.0);
        assert_eq!(config.physics.flap_velocity, -420.0);
        assert_eq!(config.skin, AvatarSkin::Arrow);
        assert_eq!(config.obstacles, ObstacleConfig::default());
    }

    #[test]
    fn test_invalid_gap_range_rejected() {
        let err = GameConfig::from_toml_str(
            r#"
            [obstacles]
            gap_top_min = 300
            gap_top_max = 100
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, FlappyError::InvalidConfig(_)));
    }

    #[test]
    fn test_upward_gravity_rejected() {
        let mut config = GameConfig::default();
        config.physics.gravity = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for text in [
            "[obstacles]\nspeed_per_tick = nan\n",
            "[obstacles]\ndespawn_x = -inf\n",
            "[obstacles]\ngap_height = inf\n",
            "[field]\nground_y = nan\n",
            "[field]\nupper_bound_y = nan\n",
        ] {
            let err = GameConfig::from_toml_str(text).unwrap_err();
            assert!(
                matches!(err, FlappyError::InvalidConfig(_)),
                "accepted {text:?}"
            );
        }

        let mut config = GameConfig::default();
        config.obstacles.score_offset = f64::NAN;
        assert!(config.validate().is_err());
        config.obstacles.score_offset = SCORE_OFFSET;
        config.field.avatar_start_y = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_or_default_swallows_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        assert!(GameConfig::load(&path).is_err());
        assert_eq!(GameConfig::load_or_default(Some(&path)), GameConfig::default());
    }
}
