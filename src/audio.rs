//! Sound cues. Fire-and-forget: a failed cue is logged and dropped.

use crate::config::AudioConfig;
use crate::error::{FlappyError, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Flap,
    Score,
    Hit,
    Death,
    Swoosh,
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue) -> Result<()>;
}

/// Plays every cue in order. Errors never reach the caller.
pub fn play_cues(sink: &mut dyn AudioSink, cues: &[AudioCue]) {
    for &cue in cues {
        if let Err(e) = sink.play(cue) {
            tracing::warn!(?cue, "sound cue failed: {e}");
        }
    }
}

/// Silent sink.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) -> Result<()> {
        Ok(())
    }
}

/// Rings the terminal bell for enabled cues.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    settings: AudioConfig,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, settings: AudioConfig) -> Self {
        Self { out, settings }
    }

    pub fn settings(&self) -> &AudioConfig {
        &self.settings
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.settings.muted = !self.settings.muted;
        self.settings.muted
    }

    pub fn is_enabled(&self, cue: AudioCue) -> bool {
        if self.settings.muted {
            return false;
        }
        match cue {
            AudioCue::Flap => self.settings.flap,
            AudioCue::Score => self.settings.score,
            AudioCue::Hit => self.settings.hit,
            AudioCue::Death => self.settings.death,
            AudioCue::Swoosh => self.settings.swoosh,
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue) -> Result<()> {
        if !self.is_enabled(cue) {
            return Ok(());
        }
        self.out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush())
            .map_err(|e| FlappyError::Audio(e.to_string()))
    }
}
