//! CLI presentation: console progress and completion summaries.

use crate::concat::{ConcatObserver, ConcatReport, Skipped};
use crate::tree::TreeStats;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Prints concatenation progress to stdout
pub struct ConsoleObserver {
    color: bool,
}

impl ConsoleObserver {
    /// Colored output only when stdout is a terminal
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcatObserver for ConsoleObserver {
    fn root_files_started(&mut self) {
        println!("Processing root configuration files...");
    }

    fn directory_started(&mut self, name: &str) {
        println!("Processing directory: '{}'...", name);
    }

    fn file_added(&mut self, relative_path: &str) {
        println!("  -> Adding: {}", relative_path);
    }

    fn skipped(&mut self, item: &Skipped) {
        if item.is_warning() {
            println!("{}", format_warning(item, self.color));
        }
    }
}

fn format_warning(item: &Skipped, color: bool) -> String {
    let label = if color {
        format!("{}", "Warning:".yellow().bold())
    } else {
        "Warning:".to_string()
    };
    format!("{} {}", label, item)
}

fn success_line(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.green().bold())
    } else {
        text.to_string()
    }
}

/// Completion message for the tree printer
pub fn format_tree_summary(
    output_path: &Path,
    root: &Path,
    stats: &TreeStats,
    color: bool,
) -> String {
    let mut output = String::new();
    output.push_str(&success_line(
        "The directory tree was generated successfully at:",
        color,
    ));
    output.push('\n');
    output.push_str(&format!("{}\n", output_path.display()));
    output.push_str(&format!("Scanned directory: {}\n", root.display()));
    output.push_str(&format!(
        "{} director{}, {} file{}",
        stats.directories,
        if stats.directories == 1 { "y" } else { "ies" },
        stats.files,
        if stats.files == 1 { "" } else { "s" }
    ));
    output
}

/// Completion message for the concatenator
pub fn format_concat_summary(output_path: &Path, report: &ConcatReport, color: bool) -> String {
    let rule = "-".repeat(RULE_WIDTH);

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Outcome", "Count"]);
    table.add_row(vec!["Written".to_string(), report.written_count().to_string()]);
    table.add_row(vec!["Empty".to_string(), report.empty_count().to_string()]);
    table.add_row(vec!["Read errors".to_string(), report.failed_count().to_string()]);
    table.add_row(vec![
        "Skipped".to_string(),
        report.warnings().count().to_string(),
    ]);

    let mut output = String::new();
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&success_line("Process finished successfully.", color));
    output.push('\n');
    output.push_str(&format!(
        "The full project was written to '{}'\n",
        output_path.display()
    ));
    output.push_str(&table.to_string());
    output.push('\n');

    let failures = report.failures();
    if !failures.is_empty() {
        output.push_str("Unreadable files:\n");
        for failure in &failures {
            output.push_str(&format!("  {}\n", failure));
        }
    }

    output.push_str(&rule);
    output
}

/// Fatal error line for stderr
pub fn format_fatal_error(message: &str, color: bool) -> String {
    let text = format!("An unexpected error occurred: {}", message);
    if color {
        format!("{}", text.red().bold())
    } else {
        text
    }
}
