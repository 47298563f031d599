//! Host settings and preferences
//!
//! Persisted as JSON next to the game. Gameplay constants are not settings;
//! only the arena, seed, sound toggles and the asteroid drift policy are.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::{StorageError, StorageResult};
use crate::highscores::FileScoreStore;
use crate::renderer::DebugOverlays;
use crate::sim::{Arena, AsteroidDrift};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in px
    pub width: f32,
    /// Arena height in px
    pub height: f32,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Sound effects on/off
    pub sound_on: bool,
    /// Background beat on/off
    pub music_on: bool,

    // === Gameplay ===
    /// Sign policy for asteroid drift
    pub asteroid_drift: AsteroidDrift,

    /// Where the highscore lives
    pub score_file: PathBuf,

    // === Debug ===
    /// Draw collision circles
    pub show_bounding: bool,
    /// Draw the ship's centre dot
    pub show_centre_dot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            seed: None,

            sound_on: true,
            music_on: true,

            asteroid_drift: AsteroidDrift::Positive,

            score_file: PathBuf::from(FileScoreStore::DEFAULT_PATH),

            show_bounding: false,
            show_centre_dot: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const DEFAULT_PATH: &'static str = "roid-belt.json";

    pub fn arena(&self) -> Arena {
        Arena {
            width: self.width,
            height: self.height,
        }
    }

    pub fn overlays(&self) -> DebugOverlays {
        DebugOverlays {
            bounding: self.show_bounding,
            centre_dot: self.show_centre_dot,
        }
    }

    /// Read settings from `path`; `Ok(None)` when the file does not exist
    pub fn try_load(path: &Path) -> StorageResult<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn try_save(&self, path: &Path) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        match self.try_save(path) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Settings not saved: {}", e),
        }
    }

    /// Replace a degenerate arena with the default size
    fn sanitized(mut self) -> Self {
        if !(self.width.is_finite() && self.width > 0.0) {
            log::warn!("Invalid arena width {}, using {}", self.width, ARENA_WIDTH);
            self.width = ARENA_WIDTH;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            log::warn!("Invalid arena height {}, using {}", self.height, ARENA_HEIGHT);
            self.height = ARENA_HEIGHT;
        }
        self
    }
}
