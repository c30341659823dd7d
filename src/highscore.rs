//! Persisted high score
//!
//! A single integer in a host-provided key-value slot. A missing or malformed
//! value reads as 0; writes happen only when a run beats the stored value, so
//! the persisted score is monotonically non-decreasing.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Slot name the high score lives under
pub const HIGH_SCORE_KEY: &str = "space_raiders_high_score";

/// Host-provided durable key-value slot
pub trait ScoreStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

/// Parse the stored high score, defaulting to 0 when absent or unparsable.
pub fn load_high_score(store: &dyn ScoreStore) -> u32 {
    match store.read(HIGH_SCORE_KEY) {
        Some(raw) => match raw.trim().parse() {
            Ok(score) => {
                log::info!("loaded high score {score}");
                score
            }
            Err(_) => {
                log::warn!("stored high score {raw:?} is not a number, using 0");
                0
            }
        },
        None => {
            log::info!("no stored high score, starting fresh");
            0
        }
    }
}

/// Write the high score back to the slot.
pub fn save_high_score(store: &mut dyn ScoreStore, score: u32) {
    store.write(HIGH_SCORE_KEY, &score.to_string());
    log::info!("high score saved: {score}");
}

/// In-memory store for tests and throwaway runs
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    slots: HashMap<String, String>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }
}

/// One-file-per-key store for the native binary
///
/// Writes are best effort: storage failure never surfaces into the game, it
/// just costs the persisted score.
#[derive(Debug)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) {
        let path = self.dir.join(key);
        if let Err(err) = fs::write(&path, value) {
            log::warn!("failed to write {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_zero() {
        let store = MemoryScoreStore::new();
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn malformed_slot_reads_as_zero() {
        let mut store = MemoryScoreStore::new();
        store.write(HIGH_SCORE_KEY, "not a number");
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn round_trip_with_surrounding_whitespace() {
        let mut store = MemoryScoreStore::new();
        save_high_score(&mut store, 4321);
        assert_eq!(load_high_score(&store), 4321);

        store.write(HIGH_SCORE_KEY, " 99\n");
        assert_eq!(load_high_score(&store), 99);
    }
}
