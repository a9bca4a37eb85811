//! Manifest lines and the writer that emits them.
//!
//! One line per successfully hashed regular file:
//! `"<relative-path> : <digest>\n"`. On unix the path is written as the raw
//! bytes of its names.

use crate::error::ScanError;
use crate::tree::hasher::Digest;
use crate::tree::path::to_slash_string;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Separator between path and digest on a manifest line.
pub const SEPARATOR: &str = " : ";

/// A single manifest record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManifestEntry {
    pub relative_path: PathBuf,
    pub digest: Digest,
}

/// Lossy for non-UTF-8 names; [`ManifestWriter`] writes the exact bytes.
impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            to_slash_string(&self.relative_path),
            SEPARATOR,
            self.digest
        )
    }
}

/// Writes manifest lines to any `Write` sink.
pub struct ManifestWriter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> ManifestWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write one line. A failing sink ends the scan.
    pub fn write_entry(&mut self, entry: &ManifestEntry) -> Result<(), ScanError> {
        write_path(&mut self.out, &entry.relative_path)
            .and_then(|()| writeln!(self.out, "{}{}", SEPARATOR, entry.digest))
            .map_err(ScanError::Output)?;
        self.lines += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ScanError> {
        self.out.flush().map_err(ScanError::Output)
    }

    /// Lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    out.write_all(to_slash_string(path).as_bytes())
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Manifest lines written.
    pub files_hashed: usize,
    /// Regular files omitted because hashing failed.
    pub hash_failures: usize,
    /// Directories whose listing failed; their subtrees are absent.
    pub unreadable_directories: usize,
    /// Entries that could not be classified.
    pub entry_errors: usize,
    /// Entries pruned by the exclusion pattern.
    pub excluded: usize,
}

impl ScanSummary {
    /// True when every discovered file made it into the manifest.
    pub fn is_clean(&self) -> bool {
        self.hash_failures == 0 && self.unreadable_directories == 0 && self.entry_errors == 0
    }
}
