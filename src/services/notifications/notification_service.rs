//! Notification service for dispatching messages through a configured provider.

use super::line_notify::LineNotifyProvider;
use super::options::SendOptions;
use super::provider::{NotificationProvider, NotificationResult};
use crate::config::LineConfig;
use crate::error::AppResult;
use std::sync::Arc;

/// Builds the provider described by `config`
///
/// # Errors
/// `AppError::Configuration` when the access token is missing or malformed.
pub fn create_provider(config: &LineConfig) -> AppResult<Arc<dyn NotificationProvider>> {
    config.validate()?;
    Ok(Arc::new(LineNotifyProvider::new(config.access_token.clone())))
}

/// Sends notifications through one shared provider
///
/// Cloning is cheap; clones share the provider.
#[derive(Clone)]
pub struct NotificationService {
    provider: Arc<dyn NotificationProvider>,
}

impl NotificationService {
    pub fn new(provider: Arc<dyn NotificationProvider>) -> Self {
        Self { provider }
    }

    /// Creates a service backed by LINE Notify
    pub fn from_config(config: &LineConfig) -> AppResult<Self> {
        create_provider(config).map(Self::new)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Sends one notification
    ///
    /// Errors are the provider's: local I/O and transport failures. A rejected
    /// request comes back as `Ok` with `success == false`.
    pub async fn send(
        &self,
        message: &str,
        options: Option<&SendOptions>,
    ) -> AppResult<NotificationResult> {
        tracing::debug!(
            provider = self.provider.name(),
            has_options = options.is_some_and(|o| !o.is_empty()),
            "Sending notification"
        );

        let result = self.provider.send(message, options).await?;

        if result.success {
            tracing::info!(
                provider = self.provider.name(),
                duration_ms = result.duration_ms,
                "Notification sent"
            );
        }

        Ok(result)
    }
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("provider", &self.provider.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn test_create_provider_requires_token() {
        match create_provider(&LineConfig::default()) {
            Err(AppError::Configuration { key, .. }) => assert_eq!(key, "line.access_token"),
            Err(other) => panic!("Expected Configuration error, got {other:?}"),
            Ok(_) => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_create_provider_line_notify() {
        let provider = create_provider(&LineConfig::new("abc")).unwrap();
        assert_eq!(provider.name(), "line_notify");
    }

    /// Records calls instead of sending
    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(String, Option<SendOptions>)>>,
    }

    #[async_trait]
    impl NotificationProvider for RecordingProvider {
        async fn send(
            &self,
            message: &str,
            options: Option<&SendOptions>,
        ) -> AppResult<NotificationResult> {
            self.calls
                .lock()
                .unwrap()
                .push((message.to_string(), options.cloned()));
            Ok(NotificationResult {
                success: true,
                status_code: Some(200),
                response: None,
                duration_ms: 0,
            })
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_service_delegates_to_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let service = NotificationService::new(provider.clone());
        assert_eq!(service.provider_name(), "recording");

        let options = SendOptions::new().with_sticker("1", "2");
        let result = service.send("hi", Some(&options)).await.unwrap();
        assert!(result.success);

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "hi");
        assert_eq!(calls[0].1.as_ref(), Some(&options));
    }
}
