//! Project concatenator
//!
//! Writes the contents of configured root files and of every non-excluded
//! file under configured directories into one text stream. Each file becomes
//! a block delimited by start/end lines carrying its relative path. Problems
//! with a single file or directory are recorded in the [`ConcatReport`] and
//! never stop the run; only failing to write the output is fatal.

pub mod block;
pub mod report;

pub use block::BlockBody;
pub use report::{ConcatReport, FileOutcome, FileStatus, Skipped};

use crate::config::ConcatConfig;
use crate::error::SnapshotError;
use crate::walk::path::{canonicalize_root, display_relative};
use crate::walk::{ExclusionSet, Walker, WalkerConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Receives progress while a concatenation runs
pub trait ConcatObserver {
    /// Root files are about to be processed
    fn root_files_started(&mut self) {}

    /// A configured directory is about to be walked
    fn directory_started(&mut self, _name: &str) {}

    /// A block is about to be written for this path
    fn file_added(&mut self, _relative_path: &str) {}

    /// An include produced no block
    fn skipped(&mut self, _item: &Skipped) {}
}

/// Observer that ignores every event
pub struct SilentObserver;

impl ConcatObserver for SilentObserver {}

/// Concatenates a project's configured files
pub struct Concatenator {
    base: PathBuf,
    config: ConcatConfig,
    dir_exclusions: ExclusionSet,
    file_exclusions: ExclusionSet,
}

impl Concatenator {
    /// Create a concatenator for the project at `base`
    pub fn new(base: &Path, config: &ConcatConfig) -> Result<Self, SnapshotError> {
        let base = canonicalize_root(base)?;
        Ok(Self {
            base,
            dir_exclusions: config.dir_exclusions(),
            file_exclusions: config.file_exclusions(),
            config: config.clone(),
        })
    }

    /// Canonical project base
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Write every block to `out`, reporting progress to `observer`
    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        observer: &mut dyn ConcatObserver,
    ) -> Result<ConcatReport, SnapshotError> {
        let mut report = ConcatReport::default();

        observer.root_files_started();
        for name in &self.config.root_files {
            self.emit_root_file(out, name, &mut report, observer)?;
        }

        for dir in &self.config.include_dirs {
            self.emit_directory(out, dir, &mut report, observer)?;
        }

        info!(
            written = report.written_count(),
            empty = report.empty_count(),
            failed = report.failed_count(),
            skipped = report.skipped.len(),
            "Concatenation finished"
        );
        Ok(report)
    }

    fn emit_root_file<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        report: &mut ConcatReport,
        observer: &mut dyn ConcatObserver,
    ) -> Result<(), SnapshotError> {
        if self.file_exclusions.contains(name) {
            skip(report, observer, Skipped::Excluded(name.to_string()));
            return Ok(());
        }

        let path = self.base.join(name);
        if path.is_file() {
            self.emit_file(out, &path, report, observer)
        } else {
            skip(report, observer, Skipped::MissingRootFile(name.to_string()));
            Ok(())
        }
    }

    fn emit_directory<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        report: &mut ConcatReport,
        observer: &mut dyn ConcatObserver,
    ) -> Result<(), SnapshotError> {
        let dir = self.base.join(name);
        if !dir.is_dir() {
            skip(report, observer, Skipped::MissingDirectory(name.to_string()));
            return Ok(());
        }
        if dir
            .file_name()
            .is_some_and(|base_name| self.dir_exclusions.contains_os(base_name))
        {
            skip(report, observer, Skipped::Excluded(name.to_string()));
            return Ok(());
        }

        observer.directory_started(name);
        let walker = Walker::with_config(
            dir,
            WalkerConfig {
                follow_symlinks: self.config.follow_symlinks,
                excluded_dirs: self.dir_exclusions.clone(),
            },
        );

        for visit in walker {
            let visit = match visit {
                Ok(visit) => visit,
                Err(SnapshotError::Walk { path, reason }) => {
                    let item = Skipped::UnreadableDirectory {
                        path: self.relative_label(&path),
                        reason,
                    };
                    skip(report, observer, item);
                    continue;
                }
                Err(e) => {
                    let item = Skipped::UnreadableDirectory {
                        path: name.to_string(),
                        reason: e.to_string(),
                    };
                    skip(report, observer, item);
                    continue;
                }
            };

            for file in &visit.files {
                if self.file_exclusions.contains(&file.name) {
                    let relative = self.relative_label(&file.path);
                    skip(report, observer, Skipped::Excluded(relative));
                    continue;
                }
                self.emit_file(out, &file.path, report, observer)?;
            }
        }

        Ok(())
    }

    fn emit_file<W: Write>(
        &self,
        out: &mut W,
        path: &Path,
        report: &mut ConcatReport,
        observer: &mut dyn ConcatObserver,
    ) -> Result<(), SnapshotError> {
        let relative_path = self.relative_label(path);
        observer.file_added(&relative_path);

        let body = BlockBody::read(path);
        block::write_block(out, &relative_path, &body).map_err(SnapshotError::Output)?;

        let status = match body {
            BlockBody::Text(text) => FileStatus::Written { bytes: text.len() },
            BlockBody::Empty => FileStatus::Empty,
            BlockBody::Unreadable(reason) => {
                warn!(path = %path.display(), %reason, "Failed to read file");
                FileStatus::ReadFailed { reason }
            }
        };
        debug!(path = %relative_path, ?status, "Added file");

        report.files.push(FileOutcome {
            relative_path,
            path: path.to_path_buf(),
            status,
        });
        Ok(())
    }

    fn relative_label(&self, path: &Path) -> String {
        display_relative(&self.base, path)
            .unwrap_or_else(|_| path.to_string_lossy().replace('\\', "/"))
    }
}

fn skip(report: &mut ConcatReport, observer: &mut dyn ConcatObserver, item: Skipped) {
    if item.is_warning() {
        warn!(item = %item, "Skipping");
    } else {
        debug!(item = %item, "Skipping");
    }
    observer.skipped(&item);
    report.skipped.push(item);
}

/// Concatenate the project at `base` into `config.output_file` inside it.
///
/// The output file is excluded by name, so it never includes itself.
pub fn write_concat_file(
    base: &Path,
    config: &ConcatConfig,
    observer: &mut dyn ConcatObserver,
) -> Result<(PathBuf, ConcatReport), SnapshotError> {
    let concatenator = Concatenator::new(base, config)?;
    let output_path = concatenator.base().join(&config.output_file);

    info!(
        base = %concatenator.base().display(),
        output = %output_path.display(),
        "Concatenating project"
    );

    let file = File::create(&output_path).map_err(|e| SnapshotError::io(&output_path, e))?;
    let mut writer = BufWriter::new(file);
    let report = concatenator.write_to(&mut writer, observer)?;
    writer
        .flush()
        .map_err(|e| SnapshotError::io(&output_path, e))?;

    Ok((output_path, report))
}
