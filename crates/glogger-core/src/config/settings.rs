//! Logger settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::logging::{ConsoleLogger, Severity};
use crate::sink::WriterSink;

/// Overrides the configured threshold
pub const LEVEL_ENV: &str = "GLOGGER_LEVEL";

/// Overrides caller rendering (`1`/`true`/`0`/`false`)
pub const CALLER_ENV: &str = "GLOGGER_CALLER";

/// Where composed lines go
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    /// Append to a file, creating it if needed
    File { path: PathBuf },
}

/// Construction parameters for a `ConsoleLogger`
///
/// ```yaml
/// level: warning
/// caller: true
/// output:
///   kind: file
///   path: /var/log/app.log
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity to emit
    pub level: Severity,
    /// Prepend `[file:line]` to each line
    pub caller: bool,
    pub output: OutputTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            caller: false,
            output: OutputTarget::Stdout,
        }
    }
}

impl LoggerConfig {
    pub fn new(level: Severity, caller: bool) -> Self {
        Self {
            level,
            caller,
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Apply `GLOGGER_LEVEL` / `GLOGGER_CALLER` from the process environment
    pub fn with_env_overrides(self) -> LogResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> LogResult<Self> {
        if let Some(level) = lookup(LEVEL_ENV) {
            self.level = level.parse()?;
        }

        if let Some(flag) = lookup(CALLER_ENV) {
            self.caller = parse_flag(CALLER_ENV, &flag)?;
        }

        Ok(self)
    }

    /// Build the logger this configuration describes
    ///
    /// Only file output can fail (the file could not be opened).
    pub fn build(&self) -> LogResult<ConsoleLogger> {
        let logger = match &self.output {
            OutputTarget::Stdout => ConsoleLogger::stdout(self.level, self.caller),
            OutputTarget::Stderr => ConsoleLogger::stderr(self.level, self.caller),
            OutputTarget::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LogError::config("file output requires a path"));
                }
                ConsoleLogger::new(WriterSink::append_file(path)?, self.level, self.caller)
            }
        };
        Ok(logger)
    }
}

fn parse_flag(name: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(LogError::config(format!("{} must be a boolean, got '{}'", name, other))),
    }
}
