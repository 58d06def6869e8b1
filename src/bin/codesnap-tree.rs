//! Codesnap tree binary
//!
//! Writes the indented directory tree of the project to a text file.

use clap::Parser;
use codesnap::cli::{
    format_fatal_error, format_tree_summary, map_error, notify_desktop_error,
    wait_for_acknowledgment, TreeCli,
};
use codesnap::error::SnapshotError;
use codesnap::logging::init_logging;
use codesnap::tree::{write_tree_file, TreeStats};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = TreeCli::parse();
    let pause = !cli.no_pause;

    match run(&cli) {
        Ok((output_path, root, stats)) => {
            info!("Tree written");
            let color = std::io::stdout().is_terminal();
            println!("{}", format_tree_summary(&output_path, &root, &stats, color));
            wait_for_acknowledgment("\nDone. Press ENTER to exit...", pause);
        }
        Err(e) => {
            error!("Tree printer failed: {}", e);
            let message = map_error(&e);
            let color = std::io::stderr().is_terminal();
            eprintln!("{}", format_fatal_error(&message, color));
            if pause {
                notify_desktop_error("Directory tree error", &message);
            }
            wait_for_acknowledgment(
                "\nAn unexpected error occurred. Press ENTER to exit...",
                pause,
            );
            process::exit(1);
        }
    }
}

fn run(cli: &TreeCli) -> Result<(PathBuf, PathBuf, TreeStats), SnapshotError> {
    let cwd = std::env::current_dir().map_err(|e| SnapshotError::io(".", e))?;
    let config = cli.common.load_config(&cwd)?;
    init_logging(&cli.common.logging_config(&config.logging))?;

    let root = config.tree.resolve_root(&cwd);
    info!(root = %root.display(), "Codesnap tree starting");

    let (output_path, stats) = write_tree_file(&root, &config.tree)?;
    let root = output_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or(root);
    Ok((output_path, root, stats))
}
