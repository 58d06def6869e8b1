//! Layered configuration loading.
//!
//! Precedence (lowest to highest): built-in defaults, the global file
//! `<config dir>/codesnap/config.toml`, the workspace file `codesnap.toml`,
//! then an explicitly requested file. Only the explicit file is required.

use super::{CodesnapConfig, WORKSPACE_CONFIG_FILE};
use crate::error::SnapshotError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`CodesnapConfig`] from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global and workspace files
    pub fn load(workspace_root: &Path) -> Result<CodesnapConfig, SnapshotError> {
        Self::load_with_override(workspace_root, None)
    }

    /// Load all layers, adding `explicit` on top when given
    pub fn load_with_override(
        workspace_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<CodesnapConfig, SnapshotError> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            builder = add_optional(builder, &global);
        }
        builder = add_optional(builder, &workspace_root.join(WORKSPACE_CONFIG_FILE));

        if let Some(path) = explicit {
            builder = add_required(builder, path)?;
        }

        finish(builder)
    }

    /// Load defaults overlaid with a single file
    pub fn load_from_file(path: &Path) -> Result<CodesnapConfig, SnapshotError> {
        finish(add_required(Config::builder(), path)?)
    }

    /// Path of the user-level config file, if a home directory is known
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "codesnap").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn add_optional(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    if path.is_file() {
        debug!(config_path = %path.display(), "Adding configuration source");
        builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
    } else {
        builder
    }
}

fn add_required(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, SnapshotError> {
    if !path.is_file() {
        return Err(SnapshotError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    debug!(config_path = %path.display(), "Adding explicit configuration source");
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(true)))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<CodesnapConfig, SnapshotError> {
    let config: CodesnapConfig = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
