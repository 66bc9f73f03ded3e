//! File upload route.
//!
//! Accepts one file, validates it, and forwards it to the destination
//! webhook. Nothing is retried and nothing is kept after the response.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    routing::post,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::{AppState, error::ApiError, extractors::read_upload};
use uplink_core::{UploadError, UploadLimits, UploadedFile, WebhookError};

/// Creates the upload routes.
///
/// The body limit leaves room for multipart framing on top of the largest
/// accepted file, so oversized bodies are cut off before being buffered.
pub fn routes(limits: &UploadLimits) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(limits.max_body_size()))
}

/// Response for a forwarded upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// Original filename.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: u64,
}

impl UploadResponse {
    fn for_file(file: &UploadedFile) -> Self {
        Self {
            success: true,
            message: format!("File \"{}\" uploaded successfully!", file.file_name()),
            file_name: file.file_name().to_string(),
            file_size: file.size(),
        }
    }
}

/// POST `/upload`
/// Validate the uploaded file and forward it to the destination webhook.
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Some(webhook) = state.webhook.as_ref() else {
        error!("DISCORD_WEBHOOK_URL is not set; rejecting upload");
        return Err(WebhookError::NotConfigured.into());
    };

    let multipart = multipart.map_err(|rejection| {
        warn!(rejection = %rejection, "Request is not a multipart upload");
        UploadError::NoFile
    })?;

    let file = read_upload(multipart, &state.limits)
        .await
        .inspect_err(|e| warn!(error = %e, "Upload rejected"))?;

    info!(
        file_name = %file.file_name(),
        file_size = file.size(),
        "Uploading file"
    );

    webhook.forward(&file).await.inspect_err(|e| {
        error!(file_name = %file.file_name(), error = %e, "Forwarding failed");
    })?;

    info!(file_name = %file.file_name(), "File uploaded successfully");

    Ok(Json(UploadResponse::for_file(&file)))
}
