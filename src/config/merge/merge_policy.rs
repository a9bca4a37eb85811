//! Merge rules: defaults and override order.

use crate::tree::walker::MAX_DEPTH;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.follow_symlinks", false)?
        .set_default("scan.max_depth", MAX_DEPTH as i64)?
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "plain")?
        .set_default("logging.output", "stderr")
}
