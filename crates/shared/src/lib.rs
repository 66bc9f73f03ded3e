//! Shared configuration and errors for Uplink.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application configuration, loaded once at startup
//! - The client-facing error taxonomy rendered by the API

pub mod config;
pub mod error;

pub use config::{AppConfig, ServerConfig, UploadConfig, WebhookConfig};
pub use error::AppError;
