//! CLI parse: clap types for mangen. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Generate a manifest of files in the specified directory with hashes.
#[derive(Parser, Debug)]
#[command(name = "mangen")]
#[command(about = "Generate a manifest of files in the specified directory with hashes")]
pub struct Cli {
    /// Directory to generate manifest for (default: current directory)
    #[arg(value_name = "DIR_PATH")]
    pub path: Option<PathBuf>,

    /// Exclude entries matching GLOB pattern (e.g., -e "*.txt")
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// Follow symbolic links to files and directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Display version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Log scan progress and summary at debug level
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all diagnostics
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (plain, text, json)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Root scanned when no DIR_PATH is given.
pub const DEFAULT_PATH: &str = ".";

impl Cli {
    /// The root to scan and whether it was defaulted.
    pub fn root(&self) -> (PathBuf, bool) {
        match &self.path {
            Some(path) => (path.clone(), false),
            None => (PathBuf::from(DEFAULT_PATH), true),
        }
    }
}
