//! Error types for the mangen manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a scan before or while it runs.
///
/// Everything below the root check (unreadable directories, unstatable
/// entries, files that fail to hash) is reported as a diagnostic and never
/// surfaces here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Could not read directory `{0}`: no such file or directory")]
    RootNotFound(PathBuf),

    #[error("Could not read directory `{0}`: not a directory")]
    RootNotDirectory(PathBuf),

    #[error("Could not read directory `{path}`: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ScanError {
    fn from(err: config::ConfigError) -> Self {
        ScanError::ConfigError(err.to_string())
    }
}

/// Failure to produce a digest for one file.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Could not hash file `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not hash file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            HashError::Open { path, .. } | HashError::Read { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &std::io::Error {
        match self {
            HashError::Open { source, .. } | HashError::Read { source, .. } => source,
        }
    }
}
