//! CLI route: merge flags into config and run the scan.

use super::parse::{Cli, DEFAULT_PATH};
use crate::config::{ConfigLoader, MangenConfig};
use crate::error::ScanError;
use crate::manifest::ScanSummary;
use crate::scan::Scanner;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// Everything needed to run one scan from the command line.
pub struct RunContext {
    root: PathBuf,
    root_defaulted: bool,
    config: MangenConfig,
}

impl RunContext {
    /// Load configuration and apply CLI flags on top.
    pub fn new(cli: &Cli) -> Result<Self, ScanError> {
        let mut config = ConfigLoader::load(cli.config.as_deref())?;
        apply_cli_overrides(&mut config, cli);
        config.validate()?;

        let (root, root_defaulted) = cli.root();
        Ok(Self {
            root,
            root_defaulted,
            config,
        })
    }

    pub fn config(&self) -> &MangenConfig {
        &self.config
    }

    /// Validate the root, then write the manifest to `out`.
    pub fn execute<W: Write>(&self, out: W) -> Result<ScanSummary, ScanError> {
        if self.root_defaulted {
            warn!(
                default_path = DEFAULT_PATH,
                "DIR_PATH was not provided, running with DEFAULT_PATH"
            );
        }

        let scanner = Scanner::new(self.root.clone(), &self.config.scan)?;
        scanner.scan(out)
    }
}

/// Apply CLI flags over loaded configuration (CLI has highest priority).
pub fn apply_cli_overrides(config: &mut MangenConfig, cli: &Cli) {
    if let Some(ref exclude) = cli.exclude {
        config.scan.exclude = Some(exclude.clone());
    }
    if cli.follow_symlinks {
        config.scan.follow_symlinks = true;
    }

    if cli.quiet {
        config.logging.enabled = false;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.output = "file".to_string();
        config.logging.file = Some(file.clone());
    }
}
