//! Player input: key mapping and per-tick coalescing.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};

/// Front-end actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Start / flap / restart, depending on state (Space, Enter, Up, click).
    Activate,
    /// Fresh run from Playing or Dead; scene reset on the title screen (r).
    Restart,
    /// Back to the title screen (t).
    ResetToTitle,
    /// Next avatar skin (s).
    CycleSkin,
    /// Toggle sound (m).
    ToggleMute,
    /// Quit (q or Esc).
    Quit,
    /// Any other key.
    Other,
}

pub fn map_key(code: KeyCode) -> PlayerAction {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => PlayerAction::Activate,
        KeyCode::Char('r') | KeyCode::Char('R') => PlayerAction::Restart,
        KeyCode::Char('t') | KeyCode::Char('T') => PlayerAction::ResetToTitle,
        KeyCode::Char('s') | KeyCode::Char('S') => PlayerAction::CycleSkin,
        KeyCode::Char('m') | KeyCode::Char('M') => PlayerAction::ToggleMute,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => PlayerAction::Quit,
        _ => PlayerAction::Other,
    }
}

pub fn map_mouse(kind: MouseEventKind) -> PlayerAction {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => PlayerAction::Activate,
        _ => PlayerAction::Other,
    }
}

/// Edge-triggered latch. Any number of presses between two ticks collapse
/// into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    pending: bool,
}

impl InputLatch {
    pub fn press(&mut self) {
        self.pending = true;
    }

    /// Consume the pending press, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
