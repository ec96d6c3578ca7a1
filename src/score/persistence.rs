//! Best-score storage.
//!
//! One integer under one fixed key. The file store keeps it in
//! `~/.flappy/flappyBestScore.json`.

use crate::constants::BEST_SCORE_KEY;
use crate::error::{FlappyError, Result};
use crate::utils::persistence::{data_dir, load_json, save_json};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Where the best score lives between runs.
pub trait BestScoreStore: fmt::Debug {
    /// `Ok(None)` when nothing has been recorded yet.
    fn load(&self) -> Result<Option<u32>>;

    fn save(&mut self, best: u32) -> Result<()>;
}

/// On-disk record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u32,
    /// Unix timestamp of the last update.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct JsonBestScoreStore {
    path: PathBuf,
}

impl JsonBestScoreStore {
    /// Store in `dir`, named after the fixed key.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{BEST_SCORE_KEY}.json")),
        }
    }

    /// Store in ~/.flappy/.
    pub fn in_data_dir() -> Result<Self> {
        Ok(Self::new(&data_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonBestScoreStore {
    fn load(&self) -> Result<Option<u32>> {
        let record: Option<BestScoreRecord> = load_json(&self.path)?;
        Ok(record.map(|r| r.best_score))
    }

    fn save(&mut self, best: u32) -> Result<()> {
        let record = BestScoreRecord {
            best_score: best,
            updated_at: Some(chrono::Utc::now().timestamp()),
        };
        save_json(&self.path, &record)
    }
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<u32>,
    writes: u32,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-process store. Clones share the same slot, so a caller can keep a
/// handle to inspect what the tracker wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBestScoreStore {
    slot: Rc<RefCell<MemorySlot>>,
}

impl MemoryBestScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(best: u32) -> Self {
        let store = Self::default();
        store.slot.borrow_mut().value = Some(best);
        store
    }

    /// Simulate an unavailable backend.
    pub fn failing() -> Self {
        let store = Self::default();
        {
            let mut slot = store.slot.borrow_mut();
            slot.fail_reads = true;
            slot.fail_writes = true;
        }
        store
    }

    pub fn value(&self) -> Option<u32> {
        self.slot.borrow().value
    }

    /// Number of successful writes.
    pub fn writes(&self) -> u32 {
        self.slot.borrow().writes
    }
}

impl BestScoreStore for MemoryBestScoreStore {
    fn load(&self) -> Result<Option<u32>> {
        let slot = self.slot.borrow();
        if slot.fail_reads {
            return Err(FlappyError::Io(std::io::Error::other("storage unavailable")));
        }
        Ok(slot.value)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        let mut slot = self.slot.borrow_mut();
        if slot.fail_writes {
            return Err(FlappyError::Io(std::io::Error::other("storage unavailable")));
        }
        slot.value = Some(best);
        slot.writes += 1;
        Ok(())
    }
}
