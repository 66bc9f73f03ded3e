//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The `/api` routes (health check and upload)
//! - Multipart extraction of the uploaded file
//! - Error responses and the panic catch-all
//! - Static file fallback for everything else

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use uplink_core::{UploadLimits, WebhookClient};
use uplink_shared::AppConfig;

/// Application state shared across handlers.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Size limits for uploads.
    pub limits: UploadLimits,
    /// Destination client, absent when no webhook URL is configured.
    pub webhook: Option<WebhookClient>,
}

impl AppState {
    /// Builds the state from loaded configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let limits = UploadLimits::from_config(&config.upload);
        let webhook = WebhookClient::from_config(&config.webhook).ok();

        Self {
            config: Arc::new(config),
            limits,
            webhook,
        }
    }
}

/// Creates the main application router.
///
/// Unmatched paths are served from the static directory, falling back to
/// its `index.html`.
pub fn create_router(state: AppState) -> Router {
    let static_dir = &state.config.server.static_dir;
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", routes::api_routes(&state.limits))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .with_state(state)
}
