//! Path canonicalization and normalization utilities

use crate::error::SnapshotError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a scan root
///
/// Resolves symlinks, `..` and `.` and drops trailing separators. The result
/// keeps the on-disk bytes of every component; normalization is applied only
/// to names shown in output.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, SnapshotError> {
    dunce::canonicalize(path).map_err(|e| {
        SnapshotError::InvalidPath(format!("Failed to canonicalize {}: {}", path.display(), e))
    })
}

/// Normalize a path string without filesystem access
pub fn normalize_path_string(path: &str) -> String {
    let mut result: String = path.nfc().collect();
    if result.len() > 1 {
        while result.len() > 1 && (result.ends_with('/') || result.ends_with('\\')) {
            result.pop();
        }
    }
    result
}

/// Normalize a single file or directory name to NFC
pub fn normalize_name(name: &OsStr) -> String {
    name.to_string_lossy().nfc().collect()
}

/// Number of directory levels `path` lies below `root`
///
/// The root itself is depth 0, its immediate children depth 1.
pub fn relative_depth(root: &Path, path: &Path) -> Result<usize, SnapshotError> {
    let relative = strip_root(root, path)?;
    Ok(relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count())
}

/// Relative path of `path` under `base`, `/`-separated on every platform
pub fn display_relative(base: &Path, path: &Path) -> Result<String, SnapshotError> {
    let relative = strip_root(base, path)?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(normalize_name(name)),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}

/// Name shown for a scan root: its final component, or the path itself for `/`
pub fn root_display_name(root: &Path) -> String {
    match root.file_name() {
        Some(name) => normalize_name(name),
        None => normalize_path_string(&root.to_string_lossy()),
    }
}

fn strip_root<'a>(root: &Path, path: &'a Path) -> Result<&'a Path, SnapshotError> {
    path.strip_prefix(root).map_err(|_| {
        SnapshotError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })
}
