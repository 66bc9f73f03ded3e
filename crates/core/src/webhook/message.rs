//! Metadata message sent alongside every forwarded file.

use serde::Serialize;

/// Name the destination displays as the sender.
const SENDER_NAME: &str = "File Uploader Bot";

/// JSON object sent in the `payload_json` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    /// Message text.
    pub content: String,
    /// Sender name.
    pub username: String,
}

impl WebhookMessage {
    /// Builds the announcement for an uploaded file.
    #[must_use]
    pub fn for_upload(file_name: &str) -> Self {
        Self {
            content: format!("📁 New file uploaded: **{file_name}**"),
            username: SENDER_NAME.to_string(),
        }
    }

    /// Serializes the message for the `payload_json` part.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
