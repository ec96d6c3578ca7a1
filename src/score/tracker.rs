//! Current score and persisted best score.

use super::persistence::BestScoreStore;

#[derive(Debug)]
pub struct ScoreTracker {
    current: u32,
    best: u32,
    store: Box<dyn BestScoreStore>,
}

impl ScoreTracker {
    /// Read the best score once from `store`. Unreadable storage counts as
    /// no best score recorded.
    pub fn load(store: Box<dyn BestScoreStore>) -> Self {
        let best = match store.load() {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                tracing::warn!("best score unavailable, starting from 0: {e}");
                0
            }
        };
        Self {
            current: 0,
            best,
            store,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Credit one passed obstacle. Returns the new score.
    pub fn record_pass(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    /// Raise the best score to the current score if it was beaten, and
    /// persist it. Returns true when the best score changed.
    ///
    /// A failed write keeps the in-memory best; it is retried on the next
    /// new best.
    pub fn commit_if_best(&mut self) -> bool {
        if self.current <= self.best {
            return false;
        }
        self.best = self.current;
        tracing::info!(best = self.best, "new best score");
        if let Err(e) = self.store.save(self.best) {
            tracing::warn!("could not persist best score: {e}");
        }
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
