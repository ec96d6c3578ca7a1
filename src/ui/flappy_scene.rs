//! UI rendering for the game session.

use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use flappy::game::{GameSession, GameState, Obstacle, ObstacleRole};
use flappy::skins::AvatarSkin;
use flappy::{FIELD_HEIGHT, FIELD_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Presentation-only settings owned by the front end.
#[derive(Debug, Clone, Copy)]
pub struct Hud {
    pub skin: AvatarSkin,
    pub muted: bool,
}

/// Ground hatching period in world units.
const GROUND_STRIPE: f64 = 12.0;

const CONTROLS: [(&str, &str); 4] = [
    ("[Space]", "Flap"),
    ("[r]", "Restart"),
    ("[s]", "Skin"),
    ("[q]", "Quit"),
];

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Pipe,
    Decoration,
    Ground { dark: bool },
}

/// Map a cell to the world point at its centre.
fn cell_to_world(col: u16, row: u16, width: u16, height: u16) -> (f64, f64) {
    let x = (col as f64 + 0.5) * FIELD_WIDTH / width as f64;
    let y = (row as f64 + 0.5) * FIELD_HEIGHT / height as f64;
    (x, y)
}

/// Map a world point to the cell containing it, if on screen.
fn world_to_cell(x: f64, y: f64, width: u16, height: u16) -> Option<(u16, u16)> {
    if !(0.0..FIELD_WIDTH).contains(&x) || !(0.0..FIELD_HEIGHT).contains(&y) {
        return None;
    }
    let col = (x * width as f64 / FIELD_WIDTH) as u16;
    let row = (y * height as f64 / FIELD_HEIGHT) as u16;
    Some((col.min(width - 1), row.min(height - 1)))
}

fn classify(x: f64, y: f64, session: &GameSession) -> Cell {
    let ground_y = session.config().field.ground_y;
    if y >= ground_y {
        let stripe = ((x + session.ground_offset()) / GROUND_STRIPE).floor() as i64;
        return Cell::Ground {
            dark: stripe.rem_euclid(2) == 0,
        };
    }
    let width = session.config().obstacles.width;
    let solid =
        |o: &Obstacle| x >= o.x && x < o.x + width && (y < o.gap_top() || y >= o.gap_bottom());
    for obstacle in session.obstacles() {
        if solid(obstacle) {
            return match obstacle.role {
                ObstacleRole::TitleDecoration => Cell::Decoration,
                ObstacleRole::Gameplay { .. } => Cell::Pipe,
            };
        }
    }
    Cell::Sky
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession, hud: Hud) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);

    render_play_area(frame, layout.content, session, hud);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session, hud);

    match session.state() {
        GameState::Title => render_title_overlay(frame, layout.content),
        GameState::Dead if session.game_over_visible() => {
            render_game_over(frame, layout.content, session)
        }
        _ => {}
    }
}

/// Play field: sky, pipes, ground and the avatar.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession, hud: Hud) {
    let (width, height) = (area.width, area.height);
    if width == 0 || height == 0 {
        return;
    }

    let avatar = session.avatar();
    let avatar_cell = world_to_cell(avatar.x, avatar.y, width, height);

    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width as usize);
        for col in 0..width {
            if avatar_cell == Some((col, row)) {
                let color = if avatar.alive {
                    Color::Yellow
                } else {
                    Color::Red
                };
                spans.push(Span::styled(
                    hud.skin.glyph(avatar.rotation, avatar.alive),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let (x, y) = cell_to_world(col, row, width, height);
            let span = match classify(x, y, session) {
                Cell::Sky => Span::raw(" "),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Decoration => Span::styled("▒", Style::default().fg(Color::DarkGray)),
                Cell::Ground { dark: true } => {
                    Span::styled("▓", Style::default().fg(Color::Yellow))
                }
                Cell::Ground { dark: false } => {
                    Span::styled("▒", Style::default().fg(Color::Yellow))
                }
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (text, color) = match session.state() {
        GameState::Title => ("Press Space to start!".to_string(), Color::Yellow),
        GameState::Playing => (format!("Score: {}", session.score()), Color::Green),
        GameState::Dead => (
            format!("Crashed with {} - Space to retry", session.score()),
            Color::Red,
        ),
    };
    render_status_bar(frame, area, &text, color, &CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, hud: Hud) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let score = if session.score_visible() {
        session.score().to_string()
    } else {
        "-".to_string()
    };
    let state = match session.state() {
        GameState::Title => "Title",
        GameState::Playing => "Flying",
        GameState::Dead => "Crashed",
    };

    let lines = vec![
        Line::from(vec![
            label(" Score: "),
            Span::styled(
                score,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label(" Best:  "),
            Span::styled(
                session.best_score().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label(" State: "),
            Span::styled(state, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            label(" Skin:  "),
            Span::styled(hud.skin.name(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label(" Sound: "),
            Span::styled(
                if hud.muted { "off" } else { "on" },
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(label(" [m] toggle sound")),
        Line::from(label(" [t] title screen")),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_title_overlay(frame: &mut Frame, area: Rect) {
    render_modal(
        frame,
        area,
        "FLAPPY BIRD",
        Color::Yellow,
        &[
            "Flap through the gaps.".to_string(),
            "[s] skin  [m] sound".to_string(),
        ],
        "Click or press Space to play!",
    );
}

fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    render_modal(
        frame,
        area,
        "GAME OVER",
        Color::Red,
        &[format!(
            "Score: {} | Best: {}",
            session.score(),
            session.best_score()
        )],
        "Click or press Space to play again!",
    );
}
