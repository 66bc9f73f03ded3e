//! Webhook client that forwards uploads to the destination.

use std::fmt;

use reqwest::multipart::{Form, Part};
use tracing::{debug, error, warn};
use uplink_shared::WebhookConfig;

use super::error::WebhookError;
use super::message::WebhookMessage;
use crate::upload::{DEFAULT_CONTENT_TYPE, UploadedFile};

/// Forwards validated uploads to a single destination webhook.
///
/// Cloning is cheap: clones share the underlying connection pool. The
/// destination URL is a secret and is kept out of `Debug` and error output.
#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Create a client for the given destination URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), url)
    }

    /// Create a client reusing an existing HTTP client.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Create a client from the webhook configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::NotConfigured`] if no URL is set.
    pub fn from_config(config: &WebhookConfig) -> Result<Self, WebhookError> {
        config.url().map(Self::new).ok_or(WebhookError::NotConfigured)
    }

    /// Sends the file and its announcement to the destination.
    ///
    /// Exactly one request is made; failures are returned, never retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination is unreachable or answers with a
    /// non-success status.
    pub async fn forward(&self, file: &UploadedFile) -> Result<(), WebhookError> {
        let payload = WebhookMessage::for_upload(file.file_name()).to_json()?;

        let form = Form::new()
            .part("file", file_part(file)?)
            .text("payload_json", payload);

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| WebhookError::Transport(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Destination accepted upload");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(
            status = status.as_u16(),
            body = %body,
            "Destination webhook returned an error"
        );

        Err(WebhookError::from_status(status.as_u16(), body))
    }
}

impl fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookClient")
            .field("url", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builds the `file` part, falling back to a generic content type when the
/// declared one does not parse.
fn file_part(file: &UploadedFile) -> Result<Part, WebhookError> {
    match part_with_type(file, file.content_type()) {
        Ok(part) => Ok(part),
        Err(e) => {
            warn!(
                content_type = %file.content_type(),
                error = %e,
                "Declared content type is invalid, sending as octet-stream"
            );
            part_with_type(file, DEFAULT_CONTENT_TYPE).map_err(Into::into)
        }
    }
}

fn part_with_type(file: &UploadedFile, content_type: &str) -> Result<Part, reqwest::Error> {
    let body = reqwest::Body::from(file.content().clone());
    Part::stream_with_length(body, file.size())
        .file_name(file.file_name().to_string())
        .mime_str(content_type)
}
