//! Score keeping: the running score and the persisted best.

pub mod persistence;
pub mod tracker;

pub use persistence::{BestScoreRecord, BestScoreStore, JsonBestScoreStore, MemoryBestScoreStore};
pub use tracker::ScoreTracker;
