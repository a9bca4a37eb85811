//! Global config file source: $XDG_CONFIG_HOME/mangen/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Path to the global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mangen").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add `path` to the builder if it names an existing file.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match path {
        Some(path) if path.is_file() => Ok(builder.add_source(File::from(path).required(false))),
        _ => Ok(builder),
    }
}
