//! Check command handler
//!
//! Validates configuration without contacting LINE.

use crate::config::settings::Settings;
use crate::error::AppResult;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration and print a short report
    ///
    /// # Errors
    /// The first validation failure, including a missing or malformed token
    pub fn execute(&self) -> AppResult<()> {
        self.config.validate()?;
        println!("✓ Configuration is valid");
        println!("✓ Application: {}", self.config.application.name);
        println!("✓ Log level: {}", self.config.logger.level);

        if !self.config.line.has_access_token() {
            println!("✗ No access token configured");
        }
        self.config.line.validate()?;
        println!("✓ Access token is configured");

        println!("Check completed successfully - ready to send");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
