//! Error types for the codesnap snapshot tools.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a snapshot run
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Failed to walk directory {path:?}: {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl SnapshotError {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }

    /// Walk failure, blamed on the entry walkdir reports or else on `dir`
    pub fn walk(dir: &Path, err: &walkdir::Error) -> Self {
        let reason = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        SnapshotError::Walk {
            path: err.path().unwrap_or(dir).to_path_buf(),
            reason,
        }
    }
}

impl From<config::ConfigError> for SnapshotError {
    fn from(err: config::ConfigError) -> Self {
        SnapshotError::Config(err.to_string())
    }
}



/// A file that could not be read during concatenation.
///
/// Recorded in the report instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}
