//! Root-relative path rendering for manifest output

use std::path::{Component, Path, PathBuf};

/// Strip `root` from `entry_path`, keeping only normal components.
///
/// Returns `None` when `entry_path` does not live under `root`. Name bytes
/// pass through untouched, so distinct files keep distinct paths.
pub fn relative_path(root: &Path, entry_path: &Path) -> Option<PathBuf> {
    let relative: PathBuf = entry_path
        .strip_prefix(root)
        .ok()?
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect();
    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Join the normal components of `path` with `/` for display.
///
/// Non-UTF-8 components are rendered lossily; use the path itself wherever
/// the exact bytes matter.
pub fn to_slash_string(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if let Component::Normal(name) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&name.to_string_lossy());
        }
    }
    out
}
