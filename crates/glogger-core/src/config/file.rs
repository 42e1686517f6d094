//! File-based configuration (YAML / JSON)
//!
//! The user-level file lives at `<config dir>/glogger/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::LoggerConfig;
use crate::error::LogResult;

impl LoggerConfig {
    /// Parse a YAML document; an empty document yields the defaults
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file; `.json` files are JSON, anything else is YAML
    pub fn from_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Path of the user-level config file
    pub fn user_path() -> PathBuf {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("glogger").join("config.yaml")
    }

    /// Load the user-level config, or the defaults if there is none
    pub fn load_user() -> LogResult<Self> {
        let path = Self::user_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Serialize as YAML
    pub fn to_yaml(&self) -> LogResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
