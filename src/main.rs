mod ui;

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::audio::{play_cues, TerminalBell};
use flappy::game::{map_key, map_mouse, PlayerAction};
use flappy::score::{BestScoreStore, JsonBestScoreStore, MemoryBestScoreStore};
use flappy::skins::AvatarSkin;
use flappy::{logging, GameConfig, GameLoop, GameSession, MAX_FRAME_DT_MS, REALTIME_FRAME_MS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use ui::{render_game, Hud};

/// Flappy Bird in the terminal.
#[derive(Debug, Parser)]
#[command(name = "flappy", version, about)]
struct Args {
    /// Config file (defaults to ~/.flappy/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to ~/.flappy/flappy.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed the obstacle generator for a repeatable run
    #[arg(long)]
    seed: Option<u64>,

    /// Start with sound off
    #[arg(long)]
    mute: bool,

    /// Avatar skin
    #[arg(long, value_enum)]
    skin: Option<AvatarSkin>,
}

fn init_logging(path: Option<PathBuf>) {
    let path = match path {
        Some(p) => p,
        None => match logging::default_log_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                return;
            }
        },
    };
    if let Err(e) = logging::init(&path) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn open_store() -> Box<dyn BestScoreStore> {
    match JsonBestScoreStore::in_data_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("best score will not persist: {e}");
            Box::new(MemoryBestScoreStore::new())
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone());

    let mut config = GameConfig::load_or_default(args.config.as_deref());
    if args.mute {
        config.audio.muted = true;
    }
    if let Some(skin) = args.skin {
        config.skin = skin;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut hud = Hud {
        skin: config.skin,
        muted: config.audio.muted,
    };
    let mut bell = TerminalBell::new(io::stdout(), config.audio.clone());
    let mut session = GameSession::new(config, open_store());
    tracing::info!(seed = ?args.seed, best = session.best_score(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut bell, &mut hud, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("terminal error: {e}");
    }
    tracing::info!(best = session.best_score(), "exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    bell: &mut TerminalBell<io::Stdout>,
    hud: &mut Hud,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_time = Duration::from_millis(REALTIME_FRAME_MS);
    let max_dt = Duration::from_millis(MAX_FRAME_DT_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            render_game(frame, area, session, *hud);
        })?;

        // Drain input until the frame is due
        loop {
            let remaining = frame_time.saturating_sub(last_tick.elapsed());
            if !event::poll(remaining)? {
                break;
            }
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key.code),
                Event::Mouse(mouse) => map_mouse(mouse.kind),
                _ => PlayerAction::Other,
            };
            match action {
                PlayerAction::Activate => session.activate(),
                PlayerAction::Restart => session.request_restart(),
                PlayerAction::ResetToTitle => session.reset_to_title(),
                PlayerAction::CycleSkin => hud.skin = hud.skin.next(),
                PlayerAction::ToggleMute => hud.muted = bell.toggle_mute(),
                PlayerAction::Quit => return Ok(()),
                PlayerAction::Other => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).min(max_dt);
        last_tick = now;

        let report = session.tick(dt, rng);
        play_cues(bell, &report.cues());
    }
}
