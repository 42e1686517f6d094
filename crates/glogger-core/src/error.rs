//! Error types
//!
//! Logging calls themselves never fail; these errors only come out of
//! parsing severities, loading configuration and installing the `log` bridge.

use thiserror::Error;

/// Errors that can occur while configuring a logger
#[derive(Error, Debug)]
pub enum LogError {
    /// Unknown severity name
    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    /// Configuration is structurally valid but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (config file, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The `log` facade already has a logger
    #[error("Failed to install logger: {0}")]
    Install(String),
}

impl LogError {
    /// Create an invalid severity error
    pub fn invalid_severity(name: impl Into<String>) -> Self {
        Self::InvalidSeverity(name.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LogError::invalid_severity("loud");
        assert_eq!(err.to_string(), "Invalid severity: loud");

        let err = LogError::config("file output requires a path");
        assert_eq!(err.to_string(), "Configuration error: file output requires a path");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LogError = io.into();
        assert!(matches!(err, LogError::Io(_)));
    }
}
