//! Webhook delivery error types.

use thiserror::Error;
use uplink_shared::AppError;

/// Webhook delivery errors.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No destination URL is configured.
    #[error("destination webhook URL is not configured")]
    NotConfigured,

    /// Destination answered 413.
    #[error("destination rejected payload as too large")]
    PayloadTooLarge,

    /// Destination answered 404.
    #[error("destination webhook not found")]
    NotFound,

    /// Destination answered with another non-success status.
    #[error("destination returned {status}: {body}")]
    Rejected {
        /// HTTP status returned by the destination.
        status: u16,
        /// Response body text, for logs only.
        body: String,
    },

    /// The request could not be built or the destination was unreachable.
    #[error("webhook transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The metadata message could not be serialized.
    #[error("webhook message serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebhookError {
    /// Maps a non-success destination status to an error.
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            413 => Self::PayloadTooLarge,
            404 => Self::NotFound,
            _ => Self::Rejected {
                status,
                body: body.into(),
            },
        }
    }
}

impl From<WebhookError> for AppError {
    fn from(e: WebhookError) -> Self {
        match e {
            WebhookError::NotConfigured => Self::Configuration(
                "Server configuration error. Please contact the administrator.".to_string(),
            ),
            WebhookError::PayloadTooLarge => Self::BadRequest(
                "File is too large for Discord (max 25MB for free servers, 500MB for boosted)."
                    .to_string(),
            ),
            WebhookError::NotFound => Self::Configuration(
                "Discord webhook not found. Please check webhook configuration.".to_string(),
            ),
            WebhookError::Rejected { .. }
            | WebhookError::Transport(_)
            | WebhookError::Serialization(_) => Self::ExternalService(
                "Failed to send file to Discord. Please try again.".to_string(),
            ),
        }
    }
}
