//! Configuration validation logic
//!
//! Ranges and formats for every settings section. The LINE token is checked
//! separately by [`Settings::validate_for_send`] so that a configuration
//! without a token can still be inspected.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LineConfig, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl LineConfig {
    /// The token is opaque: the only rule is that it is present and not blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.has_access_token() {
            return Err(ConfigError::validation(
                "line.access_token",
                "Access token is required. \
                 Set line.access_token or LINE_NOTIFY_LINE__ACCESS_TOKEN.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - At least one output must be enabled
    /// - File settings must be valid when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl FileSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = self.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path cannot be empty when file output is enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every section except the LINE credentials
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name cannot be empty.",
            ));
        }

        self.logger.validate()
    }

    /// Validate everything a send needs, including the access token
    pub fn validate_for_send(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.line.validate()
    }
}
