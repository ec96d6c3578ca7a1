// Frame timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp after a stall

// World
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;
pub const GROUND_Y: f64 = 568.0;
pub const GROUND_TILE_WIDTH: f64 = 336.0;
pub const GROUND_SCROLL_PER_TICK: f64 = 2.0;

// Avatar
pub const AVATAR_X: f64 = 100.0;
pub const AVATAR_START_Y: f64 = 250.0;
pub const AVATAR_HITBOX_WIDTH: f64 = 26.0;
pub const AVATAR_HITBOX_HEIGHT: f64 = 18.0;
pub const LOWER_BOUND_Y: f64 = 540.0;
pub const UPPER_BOUND_Y: f64 = -10.0;

// Physics
pub const GRAVITY: f64 = 1200.0;
pub const FLAP_VELOCITY: f64 = -420.0;

// Rotation (radians, cosmetic)
pub const ROTATION_FALL_THRESHOLD: f64 = 100.0;
pub const ROTATION_RISE_THRESHOLD: f64 = -100.0;
pub const ROTATION_FALL_STEP: f64 = 0.05;
pub const ROTATION_RISE_STEP: f64 = 0.02;
pub const ROTATION_MAX_DOWN: f64 = 1.2;
pub const ROTATION_MAX_UP: f64 = -0.5;
pub const ROTATION_ON_FLAP: f64 = -0.3;
pub const ROTATION_ON_DEATH: f64 = 1.57;

// Title idle float
pub const TITLE_FLOAT_AMPLITUDE: f64 = 20.0;
pub const TITLE_FLOAT_HALF_PERIOD_SECS: f64 = 1.0;

// Obstacles
pub const PIPE_WIDTH: f64 = 52.0;
pub const GAP_HEIGHT: f64 = 130.0;
pub const GAP_TOP_MIN: u32 = 80;
pub const GAP_TOP_MAX: u32 = 400;
pub const SPAWN_X: f64 = 450.0;
pub const SPAWN_INTERVAL_MS: u64 = 1800;
pub const PIPE_SPEED_PER_TICK: f64 = 3.0;
pub const SCORE_OFFSET: f64 = 15.0;
pub const DESPAWN_X: f64 = -100.0;

// Title decorations: (x, gap top)
pub const TITLE_PIPES: [(f64, f64); 3] = [(300.0, 150.0), (500.0, 250.0), (700.0, 100.0)];
pub const TITLE_GAP_HEIGHT: f64 = 150.0;
pub const TITLE_PIPE_SPEED_PER_TICK: f64 = 1.0;
pub const TITLE_WRAP_X: f64 = 500.0;

// Death sequence
pub const DEATH_CUE_DELAY_MS: u64 = 500;
pub const GAME_OVER_PANEL_DELAY_MS: u64 = 1000;

// Storage
pub const BEST_SCORE_KEY: &str = "flappyBestScore";
pub const DATA_DIR_NAME: &str = ".flappy";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "flappy.log";
