//! Logging System
//!
//! Structured logging using the `tracing` crate. Diagnostics about unreadable
//! directories, unstatable entries, and files that fail to hash are tracing
//! events. Logs never go to stdout, which carries only the manifest.
//!
//! The default `plain` format renders each event as `"<LEVEL>: <message>
//! <fields>"`, e.g. `ERROR: Could not open directory path=/srv/data error=...`.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Disable to suppress all diagnostics
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: plain, text, json (default: plain)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only)
    #[serde(default)]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "plain".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: false,
            modules: HashMap::new(),
        }
    }
}

const FORMATS: &[&str] = &["plain", "text", "json"];
const OUTPUTS: &[&str] = &["stderr", "file"];

impl LoggingConfig {
    /// Check format and output names, and that file output has a path.
    pub fn validate(&self) -> Result<(), ScanError> {
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(ScanError::ConfigError(format!(
                "Invalid log format: {} (must be 'plain', 'text', or 'json')",
                self.format
            )));
        }
        if !OUTPUTS.contains(&self.output.as_str()) {
            return Err(ScanError::ConfigError(format!(
                "Invalid log output: {} (must be 'stderr' or 'file')",
                self.output
            )));
        }
        if self.output == "file" && self.file.is_none() {
            return Err(ScanError::ConfigError(
                "Log output 'file' requires a log file path".to_string(),
            ));
        }
        Ok(())
    }
}

/// Renders `LEVEL: message key=value ...` with no timestamp or target.
struct PlainFormat;

impl<S, N> FormatEvent<S, N> for PlainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (MANGEN_LOG, MANGEN_LOG_FORMAT, MANGEN_LOG_MODULES)
/// 2. The given config (already merged from CLI flags, env, config files)
/// 3. Defaults
///
/// Calling this twice in one process is an error, not a panic.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ScanError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    config.validate()?;
    let writer = build_writer(config)?;

    let base_subscriber = Registry::default().with(filter);

    let result = match format.as_str() {
        "json" => base_subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        "text" => base_subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && config.output == "stderr")
                    .with_writer(writer),
            )
            .try_init(),
        _ => base_subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(PlainFormat)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| ScanError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

fn build_writer(config: &LoggingConfig) -> Result<BoxMakeWriter, ScanError> {
    if config.output != "file" {
        return Ok(BoxMakeWriter::new(std::io::stderr));
    }

    let log_file = config
        .file
        .clone()
        .ok_or_else(|| ScanError::ConfigError("Log output 'file' requires a log file path".to_string()))?;

    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScanError::ConfigError(format!("Failed to create log directory: {}", e))
            })?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ScanError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })?;

    Ok(BoxMakeWriter::new(Mutex::new(file)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ScanError> {
    if let Ok(filter) = EnvFilter::try_from_env("MANGEN_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&config.level).map_err(|e| {
        ScanError::ConfigError(format!("Invalid log level {}: {}", config.level, e))
    })?;

    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ScanError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }

    if let Ok(modules_str) = std::env::var("MANGEN_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    ScanError::ConfigError(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: &LoggingConfig) -> Result<String, ScanError> {
    if let Ok(format) = std::env::var("MANGEN_LOG_FORMAT") {
        if FORMATS.contains(&format.as_str()) {
            return Ok(format);
        }
    }

    if !FORMATS.contains(&config.format.as_str()) {
        return Err(ScanError::ConfigError(format!(
            "Invalid log format: {} (must be 'plain', 'text', or 'json')",
            config.format
        )));
    }

    Ok(config.format.clone())
}
