//! Incoming uploads.
//!
//! This module owns the rules an upload must satisfy before it is forwarded:
//! - Exactly one non-empty file
//! - No larger than the configured maximum
//! - Any file type

mod error;
mod types;

pub use error::UploadError;
pub use types::{DEFAULT_CONTENT_TYPE, UNKNOWN_FILE_NAME, UploadLimits, UploadedFile};
