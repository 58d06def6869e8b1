//! Codesnap concat binary
//!
//! Concatenates the configured project files into one delimited text file.

use clap::Parser;
use codesnap::cli::{
    format_concat_summary, format_fatal_error, map_error, ConcatCli, ConsoleObserver,
};
use codesnap::concat::{write_concat_file, ConcatReport};
use codesnap::error::SnapshotError;
use codesnap::logging::init_logging;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = ConcatCli::parse();

    match run(&cli) {
        Ok((output_path, report)) => {
            let color = std::io::stdout().is_terminal();
            println!("{}", format_concat_summary(&output_path, &report, color));
        }
        Err(e) => {
            error!("Concatenation failed: {}", e);
            let color = std::io::stderr().is_terminal();
            eprintln!("{}", format_fatal_error(&map_error(&e), color));
            process::exit(1);
        }
    }
}

fn run(cli: &ConcatCli) -> Result<(PathBuf, ConcatReport), SnapshotError> {
    let cwd = std::env::current_dir().map_err(|e| SnapshotError::io(".", e))?;
    let config = cli.common.load_config(&cwd)?;
    init_logging(&cli.common.logging_config(&config.logging))?;

    println!("Starting full project concatenation...");
    let base = config.concat.resolve_base(&cwd);
    info!(base = %base.display(), "Codesnap concat starting");

    write_concat_file(&base, &config.concat, &mut ConsoleObserver::new())
}
