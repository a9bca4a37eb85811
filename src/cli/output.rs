//! CLI output: error mapping and version text for the CLI surface.

use crate::error::ScanError;

/// Version shown by `-v`, as `major.minor`.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

/// The line printed by `-v`.
pub fn version_line() -> String {
    format!("MANGEN Version {}", VERSION)
}

/// Map a fatal error to the line printed on stderr.
pub fn map_error(e: &ScanError) -> String {
    format!("ERROR: {}", e)
}
