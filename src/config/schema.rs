//! Configuration schema types for `bitmap.toml`

use crate::log::{LogFormat, DEFAULT_LOG_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Diagnostic log section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file, truncated at the start of every run
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
    /// Entry format
    #[serde(default)]
    pub format: LogFormat,
    /// Mirror diagnostics to stderr
    #[serde(default)]
    pub echo: bool,
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { path: default_log_path(), format: LogFormat::default(), echo: false }
    }
}

/// Root of `bitmap.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    #[serde(default)]
    pub log: LogConfig,
}

/// A single configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "log.path")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bitmap.toml: '{}' {}", self.field, self.message)
    }
}

impl EditorConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.log.path.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "log.path".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
