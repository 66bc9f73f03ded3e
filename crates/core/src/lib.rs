//! Core relay logic for Uplink.
//!
//! This crate holds everything between the HTTP edge and the destination:
//! what a valid upload is, and how it is delivered.
//!
//! # Modules
//!
//! - `upload` - The in-memory upload and its size rules
//! - `webhook` - Building and sending the outbound multipart request

pub mod upload;
pub mod webhook;

pub use upload::{UploadError, UploadLimits, UploadedFile};
pub use webhook::{WebhookClient, WebhookError, WebhookMessage};
