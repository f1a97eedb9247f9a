//! Errors raised while loading and validating notify-line settings
//!
//! Produced by the layered loader and by the checks in [`super::validation`].
//! Converted into `AppError::Configuration` at the library boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file named explicitly could not be found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Sources were found but could not be turned into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A loaded value is out of range or missing
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    /// `LINE_NOTIFY_APP_ENV` or a similar variable holds an unusable value
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// Two settings that cannot be combined were both supplied
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity<S: Into<String>>(message: S) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}
