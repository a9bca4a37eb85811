//! Mangen: SHA-256 manifests for directory trees
//!
//! Walks a directory depth-first, hashes every regular file with SHA-256, and
//! emits one `<relative-path> : <digest>` line per file. Entries whose base
//! name matches an exclusion glob are skipped, and excluded directories are
//! pruned with their whole subtree.

pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod manifest;
pub mod scan;
pub mod tree;

pub use error::{HashError, ScanError};
pub use manifest::{ManifestEntry, ScanSummary};
pub use scan::{generate_manifest, Scanner};
