//! Request extractors.

use axum::extract::{Multipart, multipart::MultipartError};
use axum::http::StatusCode;
use bytes::BytesMut;
use tracing::debug;

use uplink_core::{UploadError, UploadLimits, UploadedFile};

/// Multipart field that carries the upload.
pub const FILE_FIELD: &str = "file";

/// Reads the single `file` part of a multipart body into memory.
///
/// The part is buffered chunk by chunk and rejected as soon as it passes
/// the size limit. Text fields are skipped, including a `file` field sent
/// without a filename; files under other names, or a second `file` part,
/// reject the whole upload.
pub async fn read_upload(
    mut multipart: Multipart,
    limits: &UploadLimits,
) -> Result<UploadedFile, UploadError> {
    let mut received: Option<(Option<String>, Option<String>, BytesMut)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e, limits))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_none() {
            debug!(field = %field_name, "Skipping non-file field");
            continue;
        }

        if field_name != FILE_FIELD {
            return Err(UploadError::UnexpectedField(field_name));
        }

        if received.is_some() {
            return Err(UploadError::MultipleFiles);
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let mut buffer = BytesMut::new();

        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(&e, limits))?
        {
            limits.check_received((buffer.len() + chunk.len()) as u64)?;
            buffer.extend_from_slice(&chunk);
        }

        received = Some((file_name, content_type, buffer));
    }

    let (file_name, content_type, buffer) = received.ok_or(UploadError::NoFile)?;
    UploadedFile::new(file_name, content_type, buffer.freeze(), limits)
}

fn multipart_error(e: &MultipartError, limits: &UploadLimits) -> UploadError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::BodyTooLarge {
            max: limits.max_file_size,
        }
    } else {
        UploadError::invalid_multipart(e.body_text())
    }
}
