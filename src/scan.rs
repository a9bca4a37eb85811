//! Scan orchestration: root validation, traversal, hashing, manifest output.
//!
//! The root check is the only fatal error. Every failure below it is logged
//! and narrows to the smallest unit possible: one file, one entry, or one
//! subtree drops out of the manifest and the scan carries on.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::manifest::{ManifestEntry, ManifestWriter, ScanSummary};
use crate::tree::hasher;
use crate::tree::walker::{FileEntry, Walker, WalkerConfig};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace};

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), ScanError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::RootNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ScanError::RootNotFound(root.to_path_buf()))
        }
        Err(e) => Err(ScanError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        }),
    }
}

/// Produces the manifest for one scan root.
pub struct Scanner {
    walker: Walker,
}

impl Scanner {
    /// Validate `root` and compile the scan settings.
    pub fn new(root: impl Into<PathBuf>, config: &ScanConfig) -> Result<Self, ScanError> {
        let root = root.into();
        validate_root(&root)?;
        Ok(Self::with_walker_config(root, config.walker_config()))
    }

    /// Build from an already-compiled walker configuration. The root is not
    /// re-validated; an unreadable root surfaces as a diagnostic.
    pub fn with_walker_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self {
            walker: Walker::with_config(root, config),
        }
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Write one manifest line per hashed file to `out`.
    pub fn scan<W: Write>(&self, out: W) -> Result<ScanSummary, ScanError> {
        let mut writer = ManifestWriter::new(out);
        let summary = self.run(|entry| writer.write_entry(&entry))?;
        writer.flush()?;
        debug!(lines = writer.lines(), "Manifest flushed");
        Ok(summary)
    }

    /// Collect manifest entries in discovery order.
    pub fn collect(&self) -> Result<(Vec<ManifestEntry>, ScanSummary), ScanError> {
        let mut entries = Vec::new();
        let summary = self.run(|entry| {
            entries.push(entry);
            Ok(())
        })?;
        Ok((entries, summary))
    }

    fn run<F>(&self, mut emit: F) -> Result<ScanSummary, ScanError>
    where
        F: FnMut(ManifestEntry) -> Result<(), ScanError>,
    {
        info!(root = %self.root().display(), "Scan started");

        let mut files_hashed = 0usize;
        let mut hash_failures = 0usize;

        let stats = self.walker.walk(|file: FileEntry| {
            trace!(path = %file.path.display(), depth = file.depth, "Hashing file");
            match hasher::hash_file(&file.path) {
                Ok(digest) => {
                    files_hashed += 1;
                    emit(ManifestEntry {
                        relative_path: file.relative_path,
                        digest,
                    })
                }
                Err(e) => {
                    hash_failures += 1;
                    error!(path = %e.path().display(), error = %e.io_error(), "Could not hash file");
                    Ok(())
                }
            }
        })?;

        let summary = ScanSummary {
            files_hashed,
            hash_failures,
            unreadable_directories: stats.unreadable_directories,
            entry_errors: stats.entry_errors,
            excluded: stats.excluded,
        };

        debug!(
            files = stats.files,
            directories = stats.directories,
            skipped_other = stats.skipped_other,
            "Traversal finished"
        );
        info!(
            files_hashed = summary.files_hashed,
            hash_failures = summary.hash_failures,
            unreadable_directories = summary.unreadable_directories,
            entry_errors = summary.entry_errors,
            excluded = summary.excluded,
            "Scan complete"
        );

        Ok(summary)
    }
}

/// Scan `root` with `exclude` as the exclusion glob (empty disables it) and
/// write the manifest to `out`.
pub fn generate_manifest<W: Write>(
    root: &Path,
    exclude: &str,
    out: W,
) -> Result<ScanSummary, ScanError> {
    let config = ScanConfig {
        exclude: Some(exclude.to_string()),
        ..ScanConfig::default()
    };
    Scanner::new(root, &config)?.scan(out)
}
