//! Filesystem walker for traversing directory structures

use crate::error::ScanError;
use crate::ignore::ExclusionPattern;
use crate::tree::path;
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};
use walkdir::WalkDir;

/// Hard cap on descent below the scan root.
///
/// Entries are listed for directories at depth `0..MAX_DEPTH` (the root is
/// depth 0), so nothing deeper than `MAX_DEPTH` levels below the root is
/// visited. Truncation is silent.
pub const MAX_DEPTH: usize = 1000;

/// A regular file discovered under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path: the scan root joined with every component down to the file.
    pub path: PathBuf,
    /// `path` with the root prefix removed. Raw name bytes are kept.
    pub relative_path: PathBuf,
    /// Number of directories between the root and this file, plus one.
    pub depth: usize,
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; links are skipped)
    pub follow_symlinks: bool,
    /// Base-name exclusion glob
    pub exclude: ExclusionPattern,
    /// Maximum depth to traverse, never above `MAX_DEPTH`
    pub max_depth: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            exclude: ExclusionPattern::disabled(),
            max_depth: MAX_DEPTH,
        }
    }
}

/// Counters collected during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files: usize,
    pub directories: usize,
    pub excluded: usize,
    pub skipped_other: usize,
    pub unreadable_directories: usize,
    pub entry_errors: usize,
}

/// Filesystem walker
///
/// Depth-first, pre-order: a directory's subtree is fully visited before its
/// next sibling. Entries within a directory come in the order the filesystem
/// yields them; no sorting is applied.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree, handing each regular file to `visit`.
    ///
    /// Unreadable directories and unstatable entries are logged and skipped;
    /// only an error returned by `visit` stops the walk.
    pub fn walk<F>(&self, mut visit: F) -> Result<WalkStats, ScanError>
    where
        F: FnMut(FileEntry) -> Result<(), ScanError>,
    {
        let mut stats = WalkStats::default();
        let mut excluded = 0usize;
        let exclude = &self.config.exclude;
        let max_depth = self.config.max_depth.min(MAX_DEPTH);
        if exclude.is_enabled() {
            debug!(pattern = exclude.as_str(), "Excluding matching entries");
        }

        let entries = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if exclude.matches(&name) {
                    debug!(path = %entry.path().display(), "Excluded by pattern");
                    excluded += 1;
                    return false;
                }
                true
            });

        // The directory most recently yielded; an error for this path means
        // it could not be listed.
        let mut last_directory: Option<PathBuf> = Some(self.root.clone());

        for result in entries {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let err_path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    if let Some(ancestor) = err.loop_ancestor() {
                        error!(
                            path = %err_path.display(),
                            ancestor = %ancestor.display(),
                            "Filesystem loop detected"
                        );
                        stats.entry_errors += 1;
                    } else if last_directory.as_deref() == Some(err_path.as_path()) {
                        error!(path = %err_path.display(), error = %describe(&err), "Could not open directory");
                        stats.unreadable_directories += 1;
                    } else {
                        error!(path = %err_path.display(), error = %describe(&err), "Failed to stat");
                        stats.entry_errors += 1;
                    }
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                stats.directories += 1;
                last_directory = Some(entry.path().to_path_buf());
                continue;
            }

            if !file_type.is_file() {
                trace!(path = %entry.path().display(), "Skipping non-regular entry");
                stats.skipped_other += 1;
                continue;
            }

            let Some(relative_path) = path::relative_path(&self.root, entry.path()) else {
                error!(path = %entry.path().display(), "Failed to create relative path");
                stats.entry_errors += 1;
                continue;
            };

            stats.files += 1;
            visit(FileEntry {
                path: entry.path().to_path_buf(),
                relative_path,
                depth: entry.depth(),
            })?;
        }

        stats.excluded = excluded;
        Ok(stats)
    }
}

fn describe(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}
