//! Send command handler
//!
//! Builds `SendOptions` from the command line and dispatches one notification.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::NotificationService;
use crate::services::notifications::{NotificationResult, SendOptions};
use std::path::PathBuf;

/// Options as given on the command line
#[derive(Debug, Clone, Default)]
pub struct SendArgs {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub sticker_package_id: Option<String>,
    pub sticker_id: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl SendArgs {
    /// Combine `--data` with the explicit flags, flags winning
    ///
    /// Returns `None` when nothing beyond the message was given.
    pub fn into_options(self) -> AppResult<Option<SendOptions>> {
        let base = SendOptions::from_data(self.data.unwrap_or_default())?;
        let options = base.merge(SendOptions {
            url: self.url,
            file: self.file,
            sticker_package_id: self.sticker_package_id,
            sticker_id: self.sticker_id,
        });

        Ok((!options.is_empty()).then_some(options))
    }
}

/// Handler for the send command
pub struct SendCommandHandler {
    service: NotificationService,
}

impl SendCommandHandler {
    /// Create a handler backed by LINE Notify
    ///
    /// # Errors
    /// Configuration errors, including a missing access token
    pub fn new(config: &Settings) -> AppResult<Self> {
        config.validate_for_send()?;
        Ok(Self::with_service(NotificationService::from_config(
            &config.line,
        )?))
    }

    pub fn with_service(service: NotificationService) -> Self {
        Self { service }
    }

    /// Send `message` once
    ///
    /// # Errors
    /// - `AppError::Io` when the attachment cannot be read
    /// - `AppError::Transport` when LINE cannot be reached
    ///
    /// A rejected request is returned as `Ok` with `success == false`.
    pub async fn execute(&self, message: &str, args: SendArgs) -> AppResult<NotificationResult> {
        let options = args.into_options()?;
        self.service.send(message, options.as_ref()).await
    }
}
