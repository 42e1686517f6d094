//! Logger configuration
//!
//! Supports multiple configuration sources:
//! - In code: `LoggerConfig { .. }` or `LoggerConfig::default()`
//! - Files: YAML (or JSON) via `LoggerConfig::from_file`
//! - Environment: `GLOGGER_LEVEL` / `GLOGGER_CALLER` overrides

mod settings;
mod file;

pub use settings::{LoggerConfig, OutputTarget, LEVEL_ENV, CALLER_ENV};
