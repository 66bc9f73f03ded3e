//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use uplink_core::{UploadError, WebhookError};
use uplink_shared::AppError;

/// Handler error rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            warn!(code = self.0.error_code(), message = %self.0, "Request rejected");
        } else {
            error!(code = self.0.error_code(), message = %self.0, "Request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        Self(e.into())
    }
}

impl From<WebhookError> for ApiError {
    fn from(e: WebhookError) -> Self {
        Self(e.into())
    }
}
