//! CLI output: error mapping and the interactive edges of a run.

use crate::config::WORKSPACE_CONFIG_FILE;
use crate::error::SnapshotError;
use dialoguer::Input;
use std::io::IsTerminal;
use std::process::{Command, Stdio};
use tracing::debug;

/// Map domain errors to a string for CLI output, with a hint where the
/// user can act on it.
pub fn map_error(e: &SnapshotError) -> String {
    match e {
        SnapshotError::Config(_) => format!(
            "{}\nCheck {} in the project, the global config file, or the --config file.",
            e, WORKSPACE_CONFIG_FILE
        ),
        SnapshotError::InvalidPath(_) => format!(
            "{}\nRun from the project directory or set a root in {}.",
            e, WORKSPACE_CONFIG_FILE
        ),
        _ => e.to_string(),
    }
}

/// Best-effort desktop error dialog. Failure to show it is ignored.
pub fn notify_desktop_error(title: &str, message: &str) {
    let shown = Command::new("zenity")
        .arg("--error")
        .arg(format!("--title={}", title))
        .arg(format!("--text={}", message))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    if let Err(e) = shown {
        debug!(error = %e, "Desktop notification unavailable");
    }
}

/// Wait for ENTER when `enabled` and stdin is an interactive terminal.
pub fn wait_for_acknowledgment(prompt: &str, enabled: bool) {
    if !enabled || !std::io::stdin().is_terminal() {
        return;
    }
    let answer = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text();
    if let Err(e) = answer {
        debug!(error = %e, "Acknowledgment prompt failed");
    }
}
