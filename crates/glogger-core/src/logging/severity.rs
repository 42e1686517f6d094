//! Log severities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Severity of a log message
///
/// Ordered from least to most severe; a logger emits a message when its
/// severity is at or above the logger's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    #[serde(alias = "warn")]
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LogError::invalid_severity(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LogError::invalid_severity(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);

        let mut sorted = Severity::ALL;
        sorted.sort();
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" Warning ".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("Fatal".parse::<Severity>().unwrap(), Severity::Fatal);

        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LogError::InvalidSeverity(ref s) if s == "verbose"));
    }

    #[test]
    fn test_severity_from_u8() {
        assert_eq!(Severity::try_from(0u8).unwrap(), Severity::Debug);
        assert_eq!(Severity::try_from(4u8).unwrap(), Severity::Fatal);
        assert!(Severity::try_from(5u8).is_err());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Warning.as_str(), "warning");
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");

        let parsed: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(parsed, Severity::Warning);

        let parsed: Severity = serde_yaml::from_str("fatal").unwrap();
        assert_eq!(parsed, Severity::Fatal);
    }
}
