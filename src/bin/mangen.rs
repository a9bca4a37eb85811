//! Mangen CLI Binary
//!
//! Writes `<relative-path> : <sha256>` lines for every regular file under a
//! directory to stdout. Diagnostics go to stderr.

use clap::Parser;
use mangen::cli::{map_error, version_line, Cli, RunContext};
use mangen::config::global_config_path;
use mangen::logging::init_logging;
use std::io::{self, BufWriter};
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return;
    }

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&context.config().logging) {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }

    if let Some(path) = global_config_path().filter(|p| p.is_file()) {
        debug!(config_path = %path.display(), "Loaded global configuration");
    }
    if let Some(path) = &cli.config {
        debug!(config_path = %path.display(), "Loaded configuration file");
    }

    let stdout = io::stdout();
    match context.execute(BufWriter::new(stdout.lock())) {
        Ok(summary) => {
            debug!(files_hashed = summary.files_hashed, "Manifest written");
        }
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
