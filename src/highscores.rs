//! Highscore persistence
//!
//! A single best score, read once when a game starts and written whenever the
//! running score beats it. Missing or corrupt data reads as "no highscore".

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// Persistent score store contract
pub trait ScoreStore {
    /// Stored highscore, or `None` when absent or unreadable
    fn load(&self) -> Option<u64>;
    /// Persist a new highscore. Failures are logged, never raised.
    fn save(&mut self, score: u64);
}

/// Highscore kept in a small JSON file (a bare integer)
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Default file name, next to the working directory
    pub const DEFAULT_PATH: &'static str = "roid-belt-highscore.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score; `Ok(None)` when the file does not exist
    pub fn try_load(&self) -> StorageResult<Option<u64>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str::<u64>(text.trim())
            .map(Some)
            .map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    pub fn try_save(&self, score: u64) -> StorageResult<()> {
        let json = serde_json::to_string(&score).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Option<u64> {
        match self.try_load() {
            Ok(Some(score)) => {
                log::info!("Loaded highscore {}", score);
                Some(score)
            }
            Ok(None) => {
                log::info!("No highscore found, starting fresh");
                None
            }
            Err(e) => {
                log::warn!("Ignoring stored highscore: {}", e);
                None
            }
        }
    }

    fn save(&mut self, score: u64) {
        if let Err(e) = self.try_save(score) {
            log::warn!("Highscore not saved: {}", e);
        }
    }
}

/// In-memory store (tests, or hosts without storage)
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub score: Option<u64>,
    /// Number of save calls received
    pub saves: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        Self {
            score: Some(score),
            saves: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Option<u64> {
        self.score
    }

    fn save(&mut self, score: u64) {
        self.score = Some(score);
        self.saves += 1;
    }
}
