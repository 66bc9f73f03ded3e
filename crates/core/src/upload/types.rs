//! Upload types and size limits.

use bytes::Bytes;
use uplink_shared::{UploadConfig, config::DEFAULT_MAX_FILE_SIZE};

use super::error::UploadError;

/// Filename used when the client sends a file part without one.
pub const UNKNOWN_FILE_NAME: &str = "unknown";

/// Content type used when the client does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Size limits applied to an incoming upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    /// Largest accepted file, in bytes.
    pub max_file_size: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl UploadLimits {
    /// Bytes allowed on top of the file for multipart framing and text fields.
    pub const MULTIPART_OVERHEAD: u64 = 64 * 1024;

    /// Create limits with the given maximum file size.
    #[must_use]
    pub const fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Create limits from the upload configuration section.
    #[must_use]
    pub const fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.max_file_size)
    }

    /// Largest request body worth reading for one file.
    #[must_use]
    pub fn max_body_size(&self) -> usize {
        let limit = self.max_file_size.saturating_add(Self::MULTIPART_OVERHEAD);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }

    /// Checks a running byte count while a file is still being received.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::FileTooLarge`] once `received` passes the maximum.
    pub fn check_received(&self, received: u64) -> Result<(), UploadError> {
        if received > self.max_file_size {
            return Err(UploadError::file_too_large(received, self.max_file_size));
        }
        Ok(())
    }

    /// Validates the final size of a fully received file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is empty or larger than the maximum.
    pub fn validate(&self, size: u64) -> Result<(), UploadError> {
        if size == 0 {
            return Err(UploadError::EmptyFile);
        }
        self.check_received(size)
    }
}

/// A validated file held in memory for the duration of one request.
///
/// The size is always the length of the buffered content, and it is always
/// within `(0, max_file_size]` for the limits it was built with.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    file_name: String,
    content_type: String,
    content: Bytes,
}

impl UploadedFile {
    /// Builds a file from a received part, enforcing the size invariant.
    ///
    /// Missing names and content types fall back to [`UNKNOWN_FILE_NAME`]
    /// and [`DEFAULT_CONTENT_TYPE`]. Any file type is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is empty or larger than the maximum.
    pub fn new(
        file_name: Option<String>,
        content_type: Option<String>,
        content: Bytes,
        limits: &UploadLimits,
    ) -> Result<Self, UploadError> {
        limits.validate(content.len() as u64)?;

        Ok(Self {
            file_name: file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_FILE_NAME.to_string()),
            content_type: content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            content,
        })
    }

    /// Original filename as sent by the client.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Content type declared by the client.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Buffered file content.
    #[must_use]
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MIB: u64 = 1024 * 1024;

    fn file(len: usize, limits: &UploadLimits) -> Result<UploadedFile, UploadError> {
        UploadedFile::new(
            Some("a.txt".to_string()),
            Some("text/plain".to_string()),
            Bytes::from(vec![b'x'; len]),
            limits,
        )
    }

    #[test]
    fn test_default_limit_is_25_mib() {
        assert_eq!(UploadLimits::default().max_file_size, 25 * MIB);
    }

    #[test]
    fn test_limits_from_config() {
        let config = UploadConfig { max_file_size: 42 };
        assert_eq!(UploadLimits::from_config(&config).max_file_size, 42);
    }

    #[test]
    fn test_body_limit_adds_overhead() {
        let limits = UploadLimits::new(1000);
        assert_eq!(limits.max_body_size(), 1000 + 64 * 1024);
        assert_eq!(UploadLimits::new(u64::MAX).max_body_size(), usize::MAX);
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = file(0, &UploadLimits::default()).unwrap_err();
        assert!(matches!(err, UploadError::EmptyFile));
    }

    #[test]
    fn test_file_at_limit_accepted() {
        let limits = UploadLimits::new(16);
        let f = file(16, &limits).expect("file at the limit is valid");
        assert_eq!(f.size(), 16);
    }

    #[test]
    fn test_file_over_limit_rejected() {
        let limits = UploadLimits::new(16);
        let err = file(17, &limits).unwrap_err();
        assert!(matches!(
            err,
            UploadError::FileTooLarge { size: 17, max: 16 }
        ));
    }

    #[test]
    fn test_check_received_allows_partial_counts() {
        let limits = UploadLimits::new(16);
        assert!(limits.check_received(0).is_ok());
        assert!(limits.check_received(16).is_ok());
        assert!(limits.check_received(17).is_err());
    }

    #[test]
    fn test_missing_name_and_type_fall_back() {
        let f = UploadedFile::new(
            None,
            Some(String::new()),
            Bytes::from_static(b"hello"),
            &UploadLimits::default(),
        )
        .expect("valid file");
        assert_eq!(f.file_name(), UNKNOWN_FILE_NAME);
        assert_eq!(f.content_type(), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_any_file_type_accepted() {
        let f = UploadedFile::new(
            Some("setup.exe".to_string()),
            Some("application/x-msdownload".to_string()),
            Bytes::from_static(b"MZ"),
            &UploadLimits::default(),
        )
        .expect("file types are not filtered");
        assert_eq!(f.file_name(), "setup.exe");
        assert_eq!(f.content_type(), "application/x-msdownload");
        assert_eq!(f.content().as_ref(), b"MZ");
    }

    proptest! {
        #[test]
        fn prop_size_matches_content_within_limit(len in 1usize..=4096) {
            let limits = UploadLimits::new(4096);
            let f = file(len, &limits).expect("in-range sizes are valid");
            prop_assert_eq!(f.size(), len as u64);
            prop_assert_eq!(f.content().len(), len);
        }

        #[test]
        fn prop_oversized_always_rejected(extra in 1usize..=4096) {
            let limits = UploadLimits::new(4096);
            let is_too_large = matches!(
                file(4096 + extra, &limits),
                Err(UploadError::FileTooLarge { .. })
            );
            prop_assert!(is_too_large);
        }
    }
}
