//! The game session: state machine, per-tick update, transitions.
//!
//! One `GameSession` owns everything a run needs. The front end latches
//! input with `activate` and calls `tick` once per frame; the session never
//! reaches out to the terminal, the clock or the filesystem on its own
//! except through the best-score store it was given.

use super::game_loop::{GameLoop, TickReport};
use super::input::InputLatch;
use super::physics::title_float_offset;
use super::spawner::{ObstacleSpawner, SpawnTimer};
use super::types::{Avatar, GameState, Obstacle, ObstacleRole};
use crate::config::GameConfig;
use crate::constants::*;
use crate::score::{BestScoreStore, ScoreTracker};
use rand::Rng;
use std::time::Duration;

/// Timers running after a death.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DeathSequence {
    elapsed: Duration,
    death_cue_fired: bool,
    panel_shown: bool,
}

#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    avatar: Avatar,
    obstacles: Vec<Obstacle>,
    score: ScoreTracker,
    spawner: ObstacleSpawner,
    spawn_timer: SpawnTimer,
    input: InputLatch,
    /// Restart requested since the last tick.
    restart_requested: bool,
    /// Total session time fed through `tick`.
    clock: Duration,
    title_elapsed: Duration,
    ground_offset: f64,
    death: Option<DeathSequence>,
    /// Scored obstacles already despawned this run.
    retired_scored: u32,
}

/// Background pipes shown behind the title screen.
fn title_decorations() -> Vec<Obstacle> {
    TITLE_PIPES
        .iter()
        .map(|&(x, gap_top)| Obstacle::title_decoration(x, gap_top, TITLE_GAP_HEIGHT))
        .collect()
}

/// Drift a decoration left and wrap it back to the right.
fn drift_decoration(obstacle: &mut Obstacle, wrap_below: f64) {
    obstacle.x -= TITLE_PIPE_SPEED_PER_TICK;
    if obstacle.x < wrap_below {
        obstacle.x = TITLE_WRAP_X;
    }
}

impl GameSession {
    /// New session on the title screen. Reads the best score once.
    pub fn new(config: GameConfig, store: Box<dyn BestScoreStore>) -> Self {
        let score = ScoreTracker::load(store);
        let spawner = ObstacleSpawner::new(&config.obstacles);
        let spawn_timer = SpawnTimer::new(config.obstacles.spawn_interval());
        let avatar = Avatar::new(config.field.avatar_x, config.field.avatar_start_y);
        Self {
            config,
            state: GameState::Title,
            avatar,
            obstacles: title_decorations(),
            score,
            spawner,
            spawn_timer,
            input: InputLatch::default(),
            restart_requested: false,
            clock: Duration::ZERO,
            title_elapsed: Duration::ZERO,
            ground_offset: 0.0,
            death: None,
            retired_scored: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score.current()
    }

    pub fn best_score(&self) -> u32 {
        self.score.best()
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn spawn_timer(&self) -> &SpawnTimer {
        &self.spawn_timer
    }

    /// Horizontal scroll of the ground strip, in `[0, GROUND_TILE_WIDTH)`.
    pub fn ground_offset(&self) -> f64 {
        self.ground_offset
    }

    pub fn score_visible(&self) -> bool {
        self.state != GameState::Title
    }

    /// Game-over panel, shown a short while after death.
    pub fn game_over_visible(&self) -> bool {
        self.death.is_some_and(|d| d.panel_shown)
    }

    /// Scored obstacles this run, including ones already despawned.
    pub fn scored_obstacle_count(&self) -> u32 {
        let live = self.obstacles.iter().filter(|o| o.is_scored()).count() as u32;
        self.retired_scored + live
    }

    /// Add an obstacle directly, bypassing the spawner.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Playing → Dead. A no-op returning false in any other state.
    pub fn enter_dead(&mut self, report: &mut TickReport) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Dead;
        self.avatar = self.avatar.killed();
        self.spawn_timer.stop();
        self.death = Some(DeathSequence::default());
        report.died = true;
        report.new_best = self.score.commit_if_best();
        tracing::info!(
            score = self.score.current(),
            best = self.score.best(),
            "run over"
        );
        true
    }

    /// Full scene reset back to the title screen. The best score survives.
    pub fn reset_to_title(&mut self) {
        tracing::debug!(from = ?self.state, "reset to title");
        self.state = GameState::Title;
        self.spawn_timer.stop();
        self.score.reset();
        self.avatar = Avatar::new(self.config.field.avatar_x, self.config.field.avatar_start_y);
        self.obstacles = title_decorations();
        self.retired_scored = 0;
        self.death = None;
        self.title_elapsed = Duration::ZERO;
        self.ground_offset = 0.0;
        self.input = InputLatch::default();
        self.restart_requested = false;
    }

    /// Ask for a fresh run on the next tick. From Playing or Dead the run
    /// restarts at once; on the title screen the scene is reset.
    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    fn handle_activate(&mut self, report: &mut TickReport) {
        match self.state {
            GameState::Title => self.start(report),
            GameState::Playing => {
                self.flap(report);
            }
            GameState::Dead => self.restart(report),
        }
    }

    /// Title → Playing.
    fn start(&mut self, report: &mut TickReport) {
        tracing::debug!("title -> playing");
        self.state = GameState::Playing;
        self.avatar = self.avatar.stilled().pinned(self.config.field.avatar_x);
        self.obstacles.clear();
        self.retired_scored = 0;
        self.score.reset();
        self.spawn_timer.start(self.clock);
        report.started = true;
        self.flap(report);
    }

    /// Only meaningful while Playing.
    fn flap(&mut self, report: &mut TickReport) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.avatar = self.avatar.flapped(self.config.physics.flap_velocity);
        report.flapped = true;
        true
    }

    /// Playing or Dead → Playing with a fresh run. An abandoned run does not
    /// count toward the best score.
    fn restart(&mut self, report: &mut TickReport) {
        if self.state == GameState::Title {
            return;
        }
        tracing::debug!(from = ?self.state, "restart");
        self.score.reset();
        self.avatar = Avatar::new(self.config.field.avatar_x, self.config.field.avatar_start_y);
        self.obstacles.clear();
        self.retired_scored = 0;
        self.death = None;
        self.spawn_timer.start(self.clock);
        self.state = GameState::Playing;
        report.restarted = true;
    }

    fn scroll_ground(&mut self) {
        self.ground_offset = (self.ground_offset + GROUND_SCROLL_PER_TICK) % GROUND_TILE_WIDTH;
    }

    fn tick_title(&mut self, dt: Duration) {
        self.title_elapsed += dt;
        self.scroll_ground();

        let float = title_float_offset(self.title_elapsed.as_secs_f64());
        self.avatar = Avatar {
            y: self.config.field.avatar_start_y - float,
            ..self.avatar
        };

        let wrap_below = self.config.obstacles.despawn_x;
        for obstacle in &mut self.obstacles {
            if obstacle.role == ObstacleRole::TitleDecoration {
                drift_decoration(obstacle, wrap_below);
            }
        }
    }

    fn tick_playing<R: Rng>(&mut self, dt: Duration, rng: &mut R, report: &mut TickReport) {
        self.avatar = self
            .avatar
            .falling(self.config.physics.gravity, dt.as_secs_f64())
            .tilted()
            .pinned(self.config.field.avatar_x);
        self.scroll_ground();

        if self.spawn_timer.poll(self.clock) {
            let obstacle = self.spawner.spawn(rng);
            tracing::debug!(gap_top = obstacle.gap_top(), "spawned obstacle");
            self.obstacles.push(obstacle);
            report.spawned = true;
        }

        report.points += self.advance_obstacles();

        if self.collided() {
            self.enter_dead(report);
        }
    }

    /// Move, score and despawn obstacles. Returns points earned.
    fn advance_obstacles(&mut self) -> u32 {
        let speed = self.config.obstacles.speed_per_tick;
        let offset = self.config.obstacles.score_offset;
        let despawn_x = self.config.obstacles.despawn_x;
        let avatar_x = self.avatar.x;

        let mut points = 0;
        for obstacle in &mut self.obstacles {
            match &mut obstacle.role {
                ObstacleRole::Gameplay { scored } => {
                    obstacle.x -= speed;
                    if !*scored && avatar_x > obstacle.x + offset {
                        *scored = true;
                        points += 1;
                    }
                }
                ObstacleRole::TitleDecoration => drift_decoration(obstacle, despawn_x),
            }
        }
        for _ in 0..points {
            self.score.record_pass();
        }

        let mut retired = 0;
        self.obstacles.retain(|o| {
            let keep = !(o.is_gameplay() && o.x < despawn_x);
            if !keep && o.is_scored() {
                retired += 1;
            }
            keep
        });
        self.retired_scored += retired;

        points
    }

    /// Field bounds, ground, or any gameplay obstacle.
    fn collided(&self) -> bool {
        let field = &self.config.field;
        if self.avatar.y > field.lower_bound_y || self.avatar.y < field.upper_bound_y {
            return true;
        }
        let hitbox = self.avatar.hitbox();
        if hitbox.bottom >= field.ground_y {
            return true;
        }
        let width = self.config.obstacles.width;
        self.obstacles
            .iter()
            .filter(|o| o.is_gameplay())
            .any(|o| {
                o.solid_rects(width, field.ground_y)
                    .iter()
                    .any(|rect| rect.overlaps(&hitbox))
            })
    }

    /// Motion is frozen; only the death timers advance.
    fn tick_dead(&mut self, dt: Duration, report: &mut TickReport) {
        let Some(death) = self.death.as_mut() else {
            return;
        };
        death.elapsed += dt;
        if !death.death_cue_fired && death.elapsed >= Duration::from_millis(DEATH_CUE_DELAY_MS) {
            death.death_cue_fired = true;
            report.death_cue = true;
        }
        if !death.panel_shown && death.elapsed >= Duration::from_millis(GAME_OVER_PANEL_DELAY_MS) {
            death.panel_shown = true;
            report.game_over_shown = true;
        }
    }
}

impl GameLoop for GameSession {
    fn activate(&mut self) {
        self.input.press();
    }

    fn tick<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        self.clock += dt;

        if std::mem::take(&mut self.restart_requested) {
            match self.state {
                GameState::Title => self.reset_to_title(),
                GameState::Playing | GameState::Dead => self.restart(&mut report),
            }
        }
        if self.input.take() {
            self.handle_activate(&mut report);
        }

        match self.state {
            GameState::Title => self.tick_title(dt),
            GameState::Playing => self.tick_playing(dt, rng, &mut report),
            GameState::Dead => self.tick_dead(dt, &mut report),
        }

        report
    }

    fn state(&self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MemoryBestScoreStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: Duration = Duration::from_millis(REALTIME_FRAME_MS);

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1234)
    }

    /// A session already Playing with no obstacles and the spawner stopped.
    fn quiet_playing_session() -> GameSession {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(MemoryBestScoreStore::new()),
        );
        session.activate();
        session.tick(DT, &mut rng());
        assert_eq!(session.state, GameState::Playing);
        session.obstacles.clear();
        session.spawn_timer.stop();
        session
    }

    /// Keep the avatar hovering at `y` so it survives any number of ticks.
    fn hold(session: &mut GameSession, y: f64) {
        session.avatar.y = y;
        session.avatar.velocity_y = 0.0;
    }

    #[test]
    fn test_new_session_on_title_with_decorations() {
        let session = GameSession::new(
            GameConfig::default(),
            Box::new(MemoryBestScoreStore::with_value(5)),
        );
        assert_eq!(session.state, GameState::Title);
        assert_eq!(session.best_score(), 5);
        assert_eq!(session.obstacles.len(), 3);
        assert!(session
            .obstacles
            .iter()
            .all(|o| o.role == ObstacleRole::TitleDecoration));
        assert!(!session.score_visible());
        assert!(!session.spawn_timer.is_running());
    }

    #[test]
    fn test_title_decorations_drift_and_wrap() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(MemoryBestScoreStore::new()),
        );
        session.obstacles[0].x = -99.5;
        let second_x = session.obstacles[1].x;
        session.tick(DT, &mut rng());
        assert_eq!(session.obstacles[0].x, TITLE_WRAP_X);
        assert_eq!(session.obstacles[1].x, second_x - 1.0);
        assert_eq!(session.obstacles.len(), 3);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_title_avatar_floats_without_falling() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(MemoryBestScoreStore::new()),
        );
        let mut r = rng();
        for _ in 0..500 {
            session.tick(DT, &mut r);
            let y = session.avatar.y;
            assert!(y <= AVATAR_START_Y + 1e-9);
            assert!(y >= AVATAR_START_Y - TITLE_FLOAT_AMPLITUDE - 1e-9);
            assert_eq!(session.avatar.velocity_y, 0.0);
        }
        assert_eq!(session.state, GameState::Title);
    }

    #[test]
    fn test_start_clears_title_pipes_and_flaps() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(MemoryBestScoreStore::new()),
        );
        session.activate();
        let report = session.tick(DT, &mut rng());
        assert!(report.started);
        assert!(report.flapped);
        assert_eq!(session.state, GameState::Playing);
        assert!(session.obstacles.is_empty());
        assert!(session.spawn_timer.is_running());
        assert!(session.score_visible());
        assert!(session.avatar.velocity_y < 0.0);
    }

    #[test]
    fn test_scoring_flips_once_at_threshold() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        // Gap 185..315 around the avatar at y = 250
        session.insert_obstacle(Obstacle::gameplay(450.0, 185.0, 130.0));

        let mut flips = 0;
        for _ in 0..400 {
            hold(&mut session, 250.0);
            let was_scored = session.obstacles[0].is_scored();
            let report = session.tick(DT, &mut r);
            assert_eq!(session.state, GameState::Playing);
            if session.obstacles.is_empty() {
                break;
            }
            let o = &session.obstacles[0];
            if o.is_scored() && !was_scored {
                flips += 1;
                assert!(AVATAR_X > o.x + SCORE_OFFSET);
                assert!(o.x + PIPE_SPEED_PER_TICK >= 85.0);
                assert_eq!(report.points, 1);
            }
            if !o.is_scored() {
                assert!(o.x >= 85.0);
                assert_eq!(report.points, 0);
            }
            assert_eq!(session.score(), session.scored_obstacle_count());
        }
        assert_eq!(flips, 1);
        assert_eq!(session.score(), 1);
        assert!(session.obstacles.is_empty());
        // Still counted after despawn
        assert_eq!(session.scored_obstacle_count(), 1);
    }

    #[test]
    fn test_offscreen_obstacle_removed_without_phantom_score() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        let mut behind = Obstacle::gameplay(-98.0, 185.0, 130.0);
        behind.role = ObstacleRole::Gameplay { scored: true };
        session.insert_obstacle(behind);
        session.insert_obstacle(Obstacle::gameplay(300.0, 185.0, 130.0));

        hold(&mut session, 250.0);
        let report = session.tick(DT, &mut r);
        assert_eq!(report.points, 0);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.obstacles[0].x, 297.0);

        for _ in 0..10 {
            hold(&mut session, 250.0);
            let report = session.tick(DT, &mut r);
            assert_eq!(report.points, 0);
        }
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_removal_does_not_skip_neighbours() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        // Two obstacles despawning in the same tick, with an unscored one
        // behind them that must still be scored.
        session.insert_obstacle(Obstacle::gameplay(-99.0, 185.0, 130.0));
        session.insert_obstacle(Obstacle::gameplay(-98.0, 185.0, 130.0));
        session.insert_obstacle(Obstacle::gameplay(-50.0, 185.0, 130.0));

        hold(&mut session, 250.0);
        let report = session.tick(DT, &mut r);
        assert_eq!(report.points, 3);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.obstacles[0].x, -53.0);
        assert_eq!(session.score(), 3);
        assert_eq!(session.scored_obstacle_count(), 3);
    }

    #[test]
    fn test_spawns_on_interval_at_right_edge() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        session.spawn_timer.start(session.clock);

        let mut spawns = Vec::new();
        for i in 0..230 {
            hold(&mut session, 250.0);
            if session.tick(DT, &mut r).spawned {
                spawns.push(i);
            }
            if session.state != GameState::Playing {
                break;
            }
        }
        // 1800ms / 16ms: first spawn on tick 113 (index 112)
        assert_eq!(spawns.first(), Some(&112));
        assert_eq!(spawns.len(), 2);
    }

    #[test]
    fn test_pipe_collision_kills() {
        let mut session = quiet_playing_session();
        hold(&mut session, 250.0);
        // Gap 400..530, avatar well above it
        session.insert_obstacle(Obstacle::gameplay(80.0, 400.0, 130.0));
        let report = session.tick(DT, &mut rng());
        assert!(report.died);
        assert_eq!(session.state, GameState::Dead);
        assert!(!session.avatar.alive);
        assert_eq!(session.avatar.rotation, ROTATION_ON_DEATH);
        assert!(!session.spawn_timer.is_running());
    }

    #[test]
    fn test_ceiling_kills() {
        let mut session = quiet_playing_session();
        session.avatar.y = -9.0;
        session.avatar.velocity_y = -420.0;
        let report = session.tick(DT, &mut rng());
        assert!(report.died);
        assert_eq!(session.state, GameState::Dead);
    }

    #[test]
    fn test_enter_dead_is_guarded() {
        let store = MemoryBestScoreStore::new();
        let mut session = GameSession::new(GameConfig::default(), Box::new(store.clone()));
        session.activate();
        session.tick(DT, &mut rng());
        session.score.record_pass();

        let mut first = TickReport::default();
        assert!(session.enter_dead(&mut first));
        assert!(first.died && first.new_best);

        let mut second = TickReport::default();
        assert!(!session.enter_dead(&mut second));
        assert_eq!(second, TickReport::default());
        assert_eq!(session.best_score(), 1);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_dead_freezes_motion_and_runs_death_timers() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        session.insert_obstacle(Obstacle::gameplay(300.0, 185.0, 130.0));
        let mut report = TickReport::default();
        session.enter_dead(&mut report);

        let avatar = session.avatar;
        let obstacles = session.obstacles.clone();
        let ground = session.ground_offset;

        let mut death_cues = 0;
        let mut panels = 0;
        for _ in 0..200 {
            let report = session.tick(DT, &mut r);
            death_cues += report.death_cue as u32;
            panels += report.game_over_shown as u32;
            assert!(!report.spawned);
        }
        assert_eq!(death_cues, 1);
        assert_eq!(panels, 1);
        assert!(session.game_over_visible());
        assert_eq!(session.avatar, avatar);
        assert_eq!(session.obstacles, obstacles);
        assert_eq!(session.ground_offset, ground);
    }

    #[test]
    fn test_flap_while_dead_restarts_instead() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        session.insert_obstacle(Obstacle::gameplay(300.0, 185.0, 130.0));
        session.score.record_pass();
        let mut report = TickReport::default();
        session.enter_dead(&mut report);

        session.activate();
        let report = session.tick(DT, &mut r);
        assert!(report.restarted);
        assert!(!report.flapped);
        assert_eq!(session.state, GameState::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles.is_empty());
        assert!(session.avatar.alive);
        assert_eq!(session.avatar.x, AVATAR_X);
        assert!(session.avatar.y > AVATAR_START_Y);
        assert!(!session.game_over_visible());
    }

    #[test]
    fn test_restart_replaces_spawn_schedule() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        for _ in 0..3 {
            let mut report = TickReport::default();
            session.enter_dead(&mut report);
            session.tick(DT, &mut r);
            session.activate();
            session.tick(DT, &mut r);
        }
        let restart_clock = session.clock;
        assert_eq!(
            session.spawn_timer.next_due(),
            Some(restart_clock + Duration::from_millis(SPAWN_INTERVAL_MS))
        );
    }

    #[test]
    fn test_restart_cancels_pending_death_cue() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        let mut report = TickReport::default();
        session.enter_dead(&mut report);
        session.tick(DT, &mut r);

        session.activate();
        session.tick(DT, &mut r);
        for _ in 0..40 {
            hold(&mut session, 250.0);
            assert!(!session.tick(DT, &mut r).death_cue);
        }
    }

    #[test]
    fn test_restart_mid_run_starts_fresh() {
        let store = MemoryBestScoreStore::new();
        let mut session = GameSession::new(GameConfig::default(), Box::new(store.clone()));
        let mut r = rng();
        session.activate();
        session.tick(DT, &mut r);
        session.insert_obstacle(Obstacle::gameplay(300.0, 185.0, 130.0));
        session.score.record_pass();
        let generation = session.spawn_timer.generation();

        session.request_restart();
        let report = session.tick(DT, &mut r);
        assert!(report.restarted);
        assert!(!report.died);
        assert_eq!(session.state, GameState::Playing);
        assert_eq!(session.score(), 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.spawn_timer.generation(), generation + 1);
        assert_eq!(
            session.spawn_timer.next_due(),
            Some(session.clock + Duration::from_millis(SPAWN_INTERVAL_MS))
        );
        // Abandoned runs are not committed
        assert_eq!(session.best_score(), 0);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_restart_after_death_skips_pending_panel() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        session.enter_dead(&mut TickReport::default());
        for _ in 0..10 {
            session.tick(DT, &mut r);
        }

        session.request_restart();
        let report = session.tick(DT, &mut r);
        assert!(report.restarted);
        assert_eq!(session.state, GameState::Playing);
        assert!(session.avatar.alive);
        assert!(!session.game_over_visible());
    }

    #[test]
    fn test_restart_on_title_resets_scene() {
        let mut session = GameSession::new(
            GameConfig::default(),
            Box::new(MemoryBestScoreStore::new()),
        );
        let mut r = rng();
        for _ in 0..30 {
            session.tick(DT, &mut r);
        }
        session.request_restart();
        let report = session.tick(DT, &mut r);
        assert!(!report.restarted);
        assert!(!report.started);
        assert_eq!(session.state, GameState::Title);
        assert!(!session.spawn_timer.is_running());
        assert_eq!(session.obstacles.len(), TITLE_PIPES.len());
        // Reset happened before this tick's drift
        assert_eq!(session.obstacles[0].x, TITLE_PIPES[0].0 - TITLE_PIPE_SPEED_PER_TICK);
    }

    #[test]
    fn test_inputs_between_ticks_coalesce() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        let mut report = TickReport::default();
        session.enter_dead(&mut report);

        // Three presses: one restart, no extra flap
        session.activate();
        session.activate();
        session.activate();
        let report = session.tick(DT, &mut r);
        assert!(report.restarted);
        assert!(!report.flapped);
        let report = session.tick(DT, &mut r);
        assert!(!report.flapped);
    }

    #[test]
    fn test_reset_to_title_keeps_best() {
        let mut session = quiet_playing_session();
        session.score.record_pass();
        session.score.record_pass();
        let mut report = TickReport::default();
        session.enter_dead(&mut report);
        assert_eq!(session.best_score(), 2);

        session.reset_to_title();
        assert_eq!(session.state, GameState::Title);
        assert_eq!(session.score(), 0);
        assert_eq!(session.best_score(), 2);
        assert_eq!(session.obstacles.len(), 3);
        assert!(!session.spawn_timer.is_running());
        assert!(session.avatar.alive);
    }

    #[test]
    fn test_ground_scrolls_and_wraps() {
        let mut session = quiet_playing_session();
        let mut r = rng();
        session.ground_offset = GROUND_TILE_WIDTH - 1.0;
        hold(&mut session, 250.0);
        session.tick(DT, &mut r);
        assert!((session.ground_offset - 1.0).abs() < 1e-9);
    }
}
