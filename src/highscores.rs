//! High score persistence
//!
//! The game only ever stores one number. Storage sits behind [`ScoreStore`] so
//! the session does not care whether it lands in a file or in memory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Default file name for the JSON store
pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.json";

/// Load/save capability for the persisted high score
pub trait ScoreStore {
    /// Stored high score, 0 when absent or unreadable
    fn load(&self) -> u64;

    /// Persist a new high score
    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn load(&self) -> u64 {
        (**self).load()
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        (**self).save(score)
    }
}

/// High score kept as a bare JSON integer in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> u64 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No high score at {} ({}), starting at 0", self.path.display(), e);
                return 0;
            }
        };

        match serde_json::from_str::<u64>(&json) {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(e) => {
                log::warn!("Ignoring malformed high score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        let json = serde_json::to_string(&score)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store, also counts writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: u64,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a high score
    pub fn with_score(score: u64) -> Self {
        Self { score, writes: 0 }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of `save` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.score
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.score = score;
        self.writes += 1;
        Ok(())
    }
}
