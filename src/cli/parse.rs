//! CLI parse: clap types for both binaries. None of the flags are required;
//! scan roots and exclusion lists come from configuration.

use crate::config::{CodesnapConfig, ConfigLoader};
use crate::error::SnapshotError;
use crate::logging::LoggingConfig;
use clap::{Args, Parser};
use std::path::{Path, PathBuf};

/// Flags shared by every codesnap binary
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file layered over the defaults, global and workspace files
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

impl CommonArgs {
    /// Load configuration for a run started in `cwd`
    pub fn load_config(&self, cwd: &Path) -> Result<CodesnapConfig, SnapshotError> {
        ConfigLoader::load_with_override(cwd, self.config.as_deref())
    }

    /// Fold logging flags into the configured logging settings.
    /// Precedence: explicit flags, then `--verbose`, then the config file.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            config.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            config.format = format.clone();
        }
        config
    }
}

/// Render the directory tree of a project into a text file
#[derive(Parser, Debug)]
#[command(name = "codesnap-tree")]
#[command(about = "Write an indented directory tree of the project to a text file")]
pub struct TreeCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit without waiting for ENTER (and without a desktop error dialog)
    #[arg(long)]
    pub no_pause: bool,
}

/// Concatenate a project's sources into one delimited text file
#[derive(Parser, Debug)]
#[command(name = "codesnap-concat")]
#[command(about = "Concatenate configured project files into one delimited text file")]
pub struct ConcatCli {
    #[command(flatten)]
    pub common: CommonArgs,
}
