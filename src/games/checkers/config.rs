//! Rule variations for checkers.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configurable rule choices.
///
/// Defaults follow standard English draughts: captures are mandatory and
/// men only capture forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// When a jump is available, simple steps are illegal.
    forced_capture: bool,

    /// Men may jump toward their own back rank.
    men_capture_backward: bool,
}

impl RulesConfig {
    /// Creates a configuration with explicit choices.
    pub fn new(forced_capture: bool, men_capture_backward: bool) -> Self {
        Self {
            forced_capture,
            men_capture_backward,
        }
    }

    /// Parses a configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse rules: {}", e)))
    }

    /// Loads a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading rules from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read rules file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Rules loaded");
        Ok(config)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            forced_capture: true,
            men_capture_backward: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
