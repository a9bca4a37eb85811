//! Config loading entry point.

use super::merge::merge_policy;
use super::sources::{environment, explicit_file, global_file};
use super::{global_config_path, MangenConfig};
use crate::error::ScanError;
use std::path::Path;

/// Loads and validates `MangenConfig` from all sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load with the global config file, an optional explicit file, and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<MangenConfig, ScanError> {
        Self::load_layers(global_config_path().as_deref(), explicit)
    }

    fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<MangenConfig, ScanError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = match explicit {
            Some(path) => explicit_file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder);

        let config: MangenConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
