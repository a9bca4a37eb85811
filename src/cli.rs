//! CLI domain: parse, route, and output mapping only.

mod output;
mod parse;
mod route;

pub use output::{map_error, version_line};
pub use parse::{Cli, DEFAULT_PATH};
pub use route::{apply_cli_overrides, RunContext};
