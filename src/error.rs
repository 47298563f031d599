//! Storage error types.
//!
//! The simulation itself has no recoverable errors. Only the host-side files
//! (highscore, settings) can fail, and callers degrade to defaults.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but its contents do not parse
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io { path, source } => {
                write!(f, "i/o error on '{}': {}", path.display(), source)
            }
            StorageError::Parse { path, source } => {
                write!(f, "could not parse '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            StorageError::Parse { source, .. } => Some(source),
        }
    }
}

/// Convenience alias: a `Result` using `StorageError` as the error type.
pub type StorageResult<T> = Result<T, StorageError>;
