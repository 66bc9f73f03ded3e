//! Upload error types.

use thiserror::Error;
use uplink_shared::AppError;

const MIB: u64 = 1024 * 1024;

/// Upload validation errors.
///
/// Every variant is a client error; nothing is forwarded when one occurs.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request carried no `file` part.
    #[error("no file part in request")]
    NoFile,

    /// The `file` part had no content.
    #[error("file is empty")]
    EmptyFile,

    /// File exceeds the configured maximum.
    #[error("file too large: {size} bytes exceeds maximum {max} bytes")]
    FileTooLarge {
        /// Bytes received before the upload was rejected.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// The request body tripped the body limit before the file was read.
    #[error("request body exceeds limit for a {max} byte file")]
    BodyTooLarge {
        /// Maximum allowed file size.
        max: u64,
    },

    /// More than one `file` part was sent.
    #[error("more than one file part in request")]
    MultipleFiles,

    /// A file was sent under a field other than `file`.
    #[error("unexpected file field: {0}")]
    UnexpectedField(String),

    /// The multipart body could not be parsed.
    #[error("invalid multipart body: {0}")]
    InvalidMultipart(String),
}

impl UploadError {
    /// Create a file too large error.
    #[must_use]
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Create an invalid multipart error.
    #[must_use]
    pub fn invalid_multipart(msg: impl Into<String>) -> Self {
        Self::InvalidMultipart(msg.into())
    }
}

/// Renders a size limit the way users read it: `25MB`, or raw bytes when the
/// limit is not a whole number of mebibytes.
fn describe_limit(max: u64) -> String {
    if max >= MIB && max.is_multiple_of(MIB) {
        format!("{}MB", max / MIB)
    } else {
        format!("{max} bytes")
    }
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        let message = match e {
            UploadError::NoFile => "No file uploaded. Please select a file.".to_string(),
            UploadError::EmptyFile => "File is empty. Please upload a valid file.".to_string(),
            UploadError::FileTooLarge { max, .. } | UploadError::BodyTooLarge { max } => {
                format!("File size exceeds {} limit.", describe_limit(max))
            }
            UploadError::MultipleFiles
            | UploadError::UnexpectedField(_)
            | UploadError::InvalidMultipart(_) => {
                "Invalid file upload. Please try again.".to_string()
            }
        };
        Self::BadRequest(message)
    }
}
