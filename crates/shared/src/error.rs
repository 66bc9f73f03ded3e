//! Application-wide error types.
//!
//! The `Display` text of every variant is the message shown to the caller,
//! so it must never carry configuration detail or upstream responses.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller input was rejected; retrying with different input may succeed.
    #[error("{0}")]
    BadRequest(String),

    /// The relay is misconfigured.
    #[error("{0}")]
    Configuration(String),

    /// The destination could not be reached or refused the delivery.
    #[error("{0}")]
    ExternalService(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Configuration(_) | Self::ExternalService(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code used in server-side logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns `true` for errors the caller can fix by changing the request.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }
}
