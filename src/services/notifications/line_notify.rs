//! LINE Notify provider implementation.
//!
//! Posts a `multipart/form-data` request to the LINE Notify API with the
//! access token as a bearer credential. Uses the global `HTTP_CLIENT` unless
//! another client is supplied.
//!
//! LINE Notify API Reference: https://notify-bot.line.me/doc/en/

use super::options::{SendOptions, fields, text_fields};
use super::provider::{NotificationProvider, NotificationResult};
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;
use tokio_util::io::ReaderStream;

/// Production endpoint of the LINE Notify API
pub const LINE_NOTIFY_ENDPOINT: &str = "https://notify-api.line.me/api/notify";

/// Runtime behind [`LineNotifyProvider::send_blocking`]
///
/// Built on first use and never shut down. Its worker thread keeps driving
/// the connection tasks the client spawns between blocking calls.
static BLOCKING_RUNTIME: LazyLock<std::io::Result<tokio::runtime::Runtime>> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("notify-line-blocking")
        .enable_all()
        .build()
});

/// LINE Notify provider
///
/// Holds the access token for one LINE Notify target (a user or a group).
/// The provider keeps no per-request state, so a single instance may serve
/// any number of concurrent sends.
///
/// # Example
/// ```ignore
/// let provider = LineNotifyProvider::new("YourAccessToken");
/// provider.send("Backup finished", None).await?;
///
/// let options = SendOptions::new().with_sticker("446", "1988");
/// provider.send("", Some(&options)).await?;
/// ```
#[derive(Clone)]
pub struct LineNotifyProvider {
    access_token: String,
    endpoint: String,
    client: reqwest::Client,
}

impl LineNotifyProvider {
    /// Creates a provider for the production endpoint
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            endpoint: LINE_NOTIFY_ENDPOINT.to_string(),
            client: HTTP_CLIENT.clone(),
        }
    }

    /// Points the provider at another endpoint, e.g. a local mock server
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Blocking form of [`NotificationProvider::send`].
    ///
    /// Drives the async implementation on [`BLOCKING_RUNTIME`], which lives
    /// as long as the process, so pooled connections of the provider's
    /// client stay usable across calls. Must not be called from within an
    /// async runtime.
    pub fn send_blocking(
        &self,
        message: &str,
        options: Option<&SendOptions>,
    ) -> AppResult<NotificationResult> {
        let runtime = BLOCKING_RUNTIME.as_ref().map_err(|e| AppError::Internal {
            source: anyhow::anyhow!("Failed to start the blocking runtime: {e}"),
        })?;

        runtime.block_on(self.send(message, options))
    }

    /// Builds the multipart body
    ///
    /// The attachment is opened here, so a missing file fails before any
    /// connection is made.
    async fn build_form(&self, message: &str, options: Option<&SendOptions>) -> AppResult<Form> {
        let mut form = text_fields(message, options)
            .into_iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name, value.to_string())
            });

        if let Some(path) = options.and_then(SendOptions::file_path) {
            form = form.part(fields::IMAGE_FILE, attachment_part(path).await?);
        }

        Ok(form)
    }

    fn validate_endpoint(&self) -> AppResult<()> {
        let url = Url::parse(&self.endpoint).map_err(|_| AppError::Validation {
            field: "endpoint".to_string(),
            reason: "Invalid URL format".to_string(),
        })?;

        let loopback = matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));
        match url.scheme() {
            "https" => Ok(()),
            "http" if loopback => Ok(()),
            _ => Err(AppError::Validation {
                field: "endpoint".to_string(),
                reason: "URL must use https protocol".to_string(),
            }),
        }
    }
}

// The token never reaches logs, not even through `{:?}`.
impl std::fmt::Debug for LineNotifyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineNotifyProvider")
            .field("access_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Opens `path` as a streamed binary part named after the file
async fn attachment_part(path: &Path) -> AppResult<Part> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| AppError::io(path, e))?;
    let metadata = file.metadata().await.map_err(|e| AppError::io(path, e))?;

    if !metadata.is_file() {
        return Err(AppError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    // ReaderStream drops the file as soon as it hits EOF.
    let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
    let mut part = Part::stream_with_length(body, metadata.len());

    if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
        part = part.file_name(name.to_string());
    }

    part.mime_str(guess_mime(path))
        .map_err(|e| AppError::Internal { source: e.into() })
}

fn guess_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl NotificationProvider for LineNotifyProvider {
    /// Sends a notification via LINE Notify
    ///
    /// A 200 answer is a silent success. Any other status is logged once at
    /// error level with the response body and still returns `Ok`, with
    /// `success` set to false.
    async fn send(
        &self,
        message: &str,
        options: Option<&SendOptions>,
    ) -> AppResult<NotificationResult> {
        let start = Instant::now();

        let form = self.build_form(message, options).await?;

        let transport = |source: reqwest::Error| AppError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        // A body cut off mid-read is a transport failure, whatever the status.
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        let success = status == StatusCode::OK;
        if success {
            tracing::debug!(provider = self.name(), duration_ms, "Notification delivered");
        } else {
            tracing::error!(
                provider = self.name(),
                status = status.as_u16(),
                "LINE Notify rejected the request: {}",
                body
            );
        }

        Ok(NotificationResult {
            success,
            status_code: Some(status.as_u16()),
            response: Some(body),
            duration_ms,
        })
    }

    fn name(&self) -> &'static str {
        "line_notify"
    }

    /// Checks that:
    /// - the access token is not blank
    /// - the endpoint is an https URL (plain http only on loopback)
    async fn validate_config(&self) -> AppResult<()> {
        if self.access_token.trim().is_empty() {
            return Err(AppError::Validation {
                field: "access_token".to_string(),
                reason: "Access token cannot be empty".to_string(),
            });
        }

        self.validate_endpoint()
    }
}
