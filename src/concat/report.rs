//! Per-item outcomes of a concatenation run

use crate::error::ReadFailure;
use std::path::PathBuf;

/// What happened to one emitted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Content written in full
    Written { bytes: usize },
    /// Empty or whitespace-only; the placeholder was written
    Empty,
    /// Reading failed; an error marker was written in place of the content
    ReadFailed { reason: String },
}

/// One wrapped block in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Path shown in the delimiters, relative to the project base
    pub relative_path: String,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// An include that produced no block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// A configured root file that does not exist or is not a regular file
    MissingRootFile(String),
    /// A configured directory that does not exist
    MissingDirectory(String),
    /// Matched an exclusion entry
    Excluded(String),
    /// A directory inside a scanned tree could not be listed
    UnreadableDirectory { path: String, reason: String },
}

impl Skipped {
    /// Whether the skip deserves a console warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, Skipped::Excluded(_))
    }
}

impl std::fmt::Display for Skipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skipped::MissingRootFile(name) => write!(f, "root file '{}' was not found", name),
            Skipped::MissingDirectory(name) => write!(f, "directory '{}' does not exist", name),
            Skipped::Excluded(name) => write!(f, "'{}' is excluded", name),
            Skipped::UnreadableDirectory { path, reason } => {
                write!(f, "directory '{}' could not be read: {}", path, reason)
            }
        }
    }
}

/// Summary of a concatenation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcatReport {
    pub files: Vec<FileOutcome>,
    pub skipped: Vec<Skipped>,
}

impl ConcatReport {
    pub fn written_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Written { .. }))
    }

    pub fn empty_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Empty))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::ReadFailed { .. }))
    }

    /// Total content bytes written (placeholders excluded)
    pub fn bytes_written(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.status {
                FileStatus::Written { bytes } => bytes,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> Vec<ReadFailure> {
        self.files
            .iter()
            .filter_map(|f| match &f.status {
                FileStatus::ReadFailed { reason } => Some(ReadFailure {
                    path: f.path.clone(),
                    reason: reason.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Skipped> {
        self.skipped.iter().filter(|s| s.is_warning())
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.status)).count()
    }
}
