//! Delivery of uploads to the destination webhook.
//!
//! Each upload becomes one multipart POST with two parts:
//! - `file`: the uploaded bytes, with the original filename and content type
//! - `payload_json`: a [`WebhookMessage`] announcing the upload

mod client;
mod error;
mod message;

pub use client::WebhookClient;
pub use error::WebhookError;
pub use message::WebhookMessage;
