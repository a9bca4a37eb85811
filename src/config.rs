//! Configuration System
//!
//! Layered configuration for scans and logging. Sources, lowest precedence
//! first: built-in defaults, the global config file, an explicit `--config`
//! file, `MANGEN_*` environment variables. CLI flags are applied on top by the
//! caller.

use crate::error::ScanError;
use crate::ignore::ExclusionPattern;
use crate::logging::LoggingConfig;
use crate::tree::walker::{WalkerConfig, MAX_DEPTH};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MangenConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Exclusion glob matched against entry base names
    #[serde(default)]
    pub exclude: Option<String>,

    /// Follow symbolic links to files and directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Depth cap; may lower `MAX_DEPTH` but never raise it
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: None,
            follow_symlinks: false,
            max_depth: default_max_depth(),
        }
    }
}

impl ScanConfig {
    /// Compile the exclusion pattern and build the walker settings.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            exclude: ExclusionPattern::from_option(self.exclude.as_deref()),
            max_depth: self.max_depth.min(MAX_DEPTH),
        }
    }
}

impl MangenConfig {
    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.scan.max_depth == 0 {
            return Err(ScanError::ConfigError(
                "scan.max_depth must be at least 1".to_string(),
            ));
        }
        self.logging.validate()
    }
}
