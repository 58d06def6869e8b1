//! Filesystem walker for traversing directory structures

use super::exclusion::ExclusionSet;
use super::path::{normalize_name, relative_depth, root_display_name};
use crate::error::SnapshotError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to descend into symbolic links to directories (default: false)
    pub follow_symlinks: bool,
    /// Directory names pruned before descent
    pub excluded_dirs: ExclusionSet,
}

/// A file listed in a directory visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// NFC display name, also the sort key
    pub name: String,
    /// Path as found on disk
    pub path: PathBuf,
}

/// One directory reached by the walk, with its sorted, non-excluded children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirVisit {
    /// Absolute (or root-relative, if the root was relative) path of the directory
    pub path: PathBuf,
    /// Levels below the walk root; the root is 0
    pub depth: usize,
    /// Display name of the directory
    pub name: String,
    /// Subdirectory names that survived pruning, sorted
    pub subdirs: Vec<String>,
    /// Files, sorted by display name
    pub files: Vec<WalkedFile>,
}

impl DirVisit {
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Display names of the listed files, in sorted order
    pub fn file_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.iter().map(|file| file.name.as_str())
    }
}

/// Pre-order filesystem walker driven by an explicit work stack.
///
/// Yields directories lazily in lexicographic pre-order. Excluded
/// subdirectories are dropped from each listing before anything is pushed
/// onto the stack, so their contents are never read. A directory that fails
/// to list yields an `Err` and the walk continues with its siblings.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
    stack: Vec<PathBuf>,
    visited: HashSet<PathBuf>,
}

impl Walker {
    /// Create a walker with default configuration
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, WalkerConfig::default())
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self {
            stack: vec![root.clone()],
            root,
            config,
            visited: HashSet::new(),
        }
    }

    /// List one directory, returning the visit and the child paths to descend into
    fn visit(&self, dir: &Path) -> Result<(DirVisit, Vec<PathBuf>), SnapshotError> {
        let depth = relative_depth(&self.root, dir)?;
        let name = if depth == 0 {
            root_display_name(dir)
        } else {
            dir.file_name()
                .map(normalize_name)
                .unwrap_or_else(|| root_display_name(dir))
        };

        let listing = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks);

        let mut subdirs: Vec<(String, PathBuf, bool)> = Vec::new();
        let mut files = Vec::new();

        for entry in listing {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => match dangling_link(&err) {
                    Some(path) => {
                        debug!(path = %path.display(), "Listing dangling link as a file");
                        let name = path
                            .file_name()
                            .map(normalize_name)
                            .unwrap_or_default();
                        files.push(WalkedFile { name, path });
                        continue;
                    }
                    None => return Err(SnapshotError::walk(dir, &err)),
                },
            };
            let entry_name = normalize_name(entry.file_name());
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.config.excluded_dirs.contains(&entry_name) {
                    trace!(path = %entry.path().display(), "Pruned excluded directory");
                    continue;
                }
                subdirs.push((entry_name, entry.into_path(), true));
            } else if file_type.is_symlink() && entry.path().is_dir() {
                // Only reachable when links are not followed
                if self.config.excluded_dirs.contains(&entry_name) {
                    continue;
                }
                subdirs.push((entry_name, entry.into_path(), false));
            } else {
                files.push(WalkedFile {
                    name: entry_name,
                    path: entry.into_path(),
                });
            }
        }

        subdirs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        files.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        let descend = subdirs
            .iter()
            .filter(|(_, _, walkable)| *walkable)
            .map(|(_, path, _)| path.clone())
            .collect();

        let visit = DirVisit {
            path: dir.to_path_buf(),
            depth,
            name,
            subdirs: subdirs.into_iter().map(|(name, _, _)| name).collect(),
            files,
        };

        Ok((visit, descend))
    }

    /// Guard against symlink cycles when links are followed
    fn first_visit(&mut self, dir: &Path) -> bool {
        if !self.config.follow_symlinks {
            return true;
        }
        let key = dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        self.visited.insert(key)
    }
}

/// Path of a listed entry whose link target cannot be resolved.
///
/// Only happens when links are followed; the link itself still exists.
fn dangling_link(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    let metadata = fs::symlink_metadata(path).ok()?;
    metadata
        .file_type()
        .is_symlink()
        .then(|| path.to_path_buf())
}

impl Iterator for Walker {
    type Item = Result<DirVisit, SnapshotError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = self.stack.pop()?;
            if !self.first_visit(&dir) {
                debug!(path = %dir.display(), "Skipping already visited directory");
                continue;
            }

            return match self.visit(&dir) {
                Ok((visit, descend)) => {
                    debug!(
                        path = %dir.display(),
                        depth = visit.depth,
                        files = visit.files.len(),
                        subdirs = visit.subdirs.len(),
                        "Visited directory"
                    );
                    // Reverse so the lexicographically first child is popped next
                    self.stack.extend(descend.into_iter().rev());
                    Some(Ok(visit))
                }
                Err(e) => Some(Err(e)),
            };
        }
    }
}
