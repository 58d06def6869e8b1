//! Configuration System
//!
//! Explicit configuration structs for the tree printer and the concatenator.
//! The defaults are the built-in include/exclude lists; optional TOML files
//! can override any of them.

use crate::error::SnapshotError;
use crate::logging::LoggingConfig;
use crate::walk::ExclusionSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod loader;

pub use loader::ConfigLoader;

/// Name of the folder holding the snapshot tools and their outputs
pub const TOOLING_DIR: &str = "0_context_tools";

/// Workspace-level configuration file name
pub const WORKSPACE_CONFIG_FILE: &str = "codesnap.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CodesnapConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tree printer settings
    #[serde(default)]
    pub tree: TreeConfig,

    /// Concatenator settings
    #[serde(default)]
    pub concat: ConcatConfig,
}

/// Tree printer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeConfig {
    /// Directory to render (default: current working directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Output file name, written inside the root
    #[serde(default = "default_tree_output")]
    pub output_file: String,

    /// Directory names never descended into
    #[serde(default = "default_tree_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Descend into symbolic links to directories
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_tree_output() -> String {
    "00_directory_tree.txt".to_string()
}

fn default_tree_excluded_dirs() -> Vec<String> {
    ["node_modules", TOOLING_DIR, ".git", "dist"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: None,
            output_file: default_tree_output(),
            excluded_dirs: default_tree_excluded_dirs(),
            follow_symlinks: false,
        }
    }
}

impl TreeConfig {
    pub fn exclusions(&self) -> ExclusionSet {
        self.excluded_dirs.iter().collect()
    }

    /// Scan root, falling back to `cwd`
    pub fn resolve_root(&self, cwd: &Path) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        }
    }
}

/// Project concatenator configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConcatConfig {
    /// Project base directory (default: current working directory)
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Output file name, written inside the base directory
    #[serde(default = "default_concat_output")]
    pub output_file: String,

    /// Directories scanned recursively, in order
    #[serde(default = "default_include_dirs")]
    pub include_dirs: Vec<String>,

    /// Files taken from the project base, in order
    #[serde(default = "default_root_files")]
    pub root_files: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_concat_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// File names never read, wherever they appear
    #[serde(default = "default_concat_excluded_files")]
    pub excluded_files: Vec<String>,

    /// Descend into symbolic links to directories
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_concat_output() -> String {
    "00_project_concat.txt".to_string()
}

fn default_include_dirs() -> Vec<String> {
    ["src", ".github", "examples json"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_root_files() -> Vec<String> {
    [
        "package.json",
        "package-lock.json",
        "vite.config.ts",
        "tailwind.config.cjs",
        "postcss.config.cjs",
        "tsconfig.json",
        "main.cjs",
        "preload.cjs",
        "index.html",
        "README.md",
        "LICENSE",
        ".gitattributes",
        ".gitignore",
        "metadata.json",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_concat_excluded_dirs() -> Vec<String> {
    [TOOLING_DIR, "node_modules", "dist", ".git", "chekpoints"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_concat_excluded_files() -> Vec<String> {
    ["google-credentials.json", ".env.local"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            output_file: default_concat_output(),
            include_dirs: default_include_dirs(),
            root_files: default_root_files(),
            excluded_dirs: default_concat_excluded_dirs(),
            excluded_files: default_concat_excluded_files(),
            follow_symlinks: false,
        }
    }
}

impl ConcatConfig {
    pub fn dir_exclusions(&self) -> ExclusionSet {
        self.excluded_dirs.iter().collect()
    }

    /// Excluded file names, always including the output file itself
    pub fn file_exclusions(&self) -> ExclusionSet {
        let mut set: ExclusionSet = self.excluded_files.iter().collect();
        set.insert(&self.output_file);
        set
    }

    /// Project base, falling back to `cwd`
    pub fn resolve_base(&self, cwd: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if base.is_absolute() => base.clone(),
            Some(base) => cwd.join(base),
            None => cwd.to_path_buf(),
        }
    }
}

impl CodesnapConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut errors = Vec::new();

        check_output_name("tree.output_file", &self.tree.output_file, &mut errors);
        check_names("tree.excluded_dirs", &self.tree.excluded_dirs, &mut errors);

        check_output_name("concat.output_file", &self.concat.output_file, &mut errors);
        check_names("concat.excluded_dirs", &self.concat.excluded_dirs, &mut errors);
        check_names("concat.excluded_files", &self.concat.excluded_files, &mut errors);
        check_names("concat.root_files", &self.concat.root_files, &mut errors);
        if self.concat.include_dirs.iter().any(|d| d.trim().is_empty()) {
            errors.push("concat.include_dirs: entries cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SnapshotError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}

fn check_output_name(field: &str, name: &str, errors: &mut Vec<String>) {
    if name.trim().is_empty() {
        errors.push(format!("{}: cannot be empty", field));
    } else if name.contains('/') || name.contains('\\') {
        errors.push(format!("{}: '{}' must be a file name, not a path", field, name));
    }
}

fn check_names(field: &str, names: &[String], errors: &mut Vec<String>) {
    for name in names {
        if name.trim().is_empty() {
            errors.push(format!("{}: entries cannot be empty", field));
        } else if name.contains('/') || name.contains('\\') {
            errors.push(format!(
                "{}: '{}' must be a bare name (matching is by exact name)",
                field, name
            ));
        }
    }
}
