//! Core notification provider trait and types.
//!
//! A provider turns a text message plus optional [`SendOptions`] into one
//! request against a notification backend.

use super::options::SendOptions;
use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of a send attempt that reached the remote service
///
/// A rejected request (non-200) is still an `Ok` outcome: `success` is false
/// and `response` carries the body the service returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Whether the service answered 200
    pub success: bool,
    /// HTTP status code of the response
    pub status_code: Option<u16>,
    /// Response body as text
    pub response: Option<String>,
    /// Time taken for the operation in milliseconds
    pub duration_ms: u64,
}

/// Trait for notification providers
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// Providers are shared across tasks, so they must be `Send + Sync`.
///
/// # Example
/// ```ignore
/// let provider = LineNotifyProvider::new("token");
/// let options = SendOptions::new().with_url("https://example.com/cat.png");
/// let result = provider.send("look at this", Some(&options)).await?;
/// ```
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Sends one notification
    ///
    /// # Arguments
    /// * `message` - Text of the notification, sent even when empty
    /// * `options` - Optional image and sticker attachments
    ///
    /// # Errors
    /// `AppError::Io` when a local attachment cannot be opened, before any
    /// network activity. `AppError::Transport` when no HTTP response arrives.
    async fn send(
        &self,
        message: &str,
        options: Option<&SendOptions>,
    ) -> AppResult<NotificationResult>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Validates provider configuration (optional, default no-op)
    async fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_with_snake_case_keys() {
        let result = NotificationResult {
            success: false,
            status_code: Some(401),
            response: Some("{\"status\":401}".to_string()),
            duration_ms: 12,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["status_code"], 401);
        assert_eq!(value["duration_ms"], 12);
    }
}
