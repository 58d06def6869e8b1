//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs go to stderr so the
//! console status lines on stdout stay readable; both binaries keep logging off
//! unless `--verbose` or `--log-level` asks for it.

use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full `EnvFilter` directive string
pub const LOG_ENV_VAR: &str = "CODESNAP_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
            modules: BTreeMap::new(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Initialize the global tracing subscriber
///
/// Priority order (highest to lowest):
/// 1. `CODESNAP_LOG` environment variable
/// 2. Configuration (CLI flags are folded into it by the binaries)
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), SnapshotError> {
    let filter = build_env_filter(config)?;
    let format = parse_format(&config.format)?;

    let base_subscriber = Registry::default().with(filter);

    let installed = match format {
        LogFormat::Json => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| SnapshotError::Logging(format!("Failed to install subscriber: {}", e)))
}

/// Build environment filter from the environment or config
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, SnapshotError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    filter_from_config(config)
}

fn filter_from_config(config: &LoggingConfig) -> Result<EnvFilter, SnapshotError> {
    let level = parse_level(&config.level)?;
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);
    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| SnapshotError::Logging(format!("Invalid log directive: {}", e)))?,
        );
    }

    Ok(filter)
}

fn parse_level(level: &str) -> Result<&str, SnapshotError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(level),
        other => Err(SnapshotError::Logging(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error or off)",
            other
        ))),
    }
}

/// Parse the configured log format
pub fn parse_format(format: &str) -> Result<LogFormat, SnapshotError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(SnapshotError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}
