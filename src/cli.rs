//! CLI domain: argument parsing, console presentation and process-edge helpers
//! shared by the `codesnap-tree` and `codesnap-concat` binaries.

mod output;
mod parse;
mod presentation;

pub use output::{map_error, notify_desktop_error, wait_for_acknowledgment};
pub use parse::{CommonArgs, ConcatCli, TreeCli};
pub use presentation::{
    format_concat_summary, format_fatal_error, format_tree_summary, ConsoleObserver,
};
