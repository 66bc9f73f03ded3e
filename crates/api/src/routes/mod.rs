//! API route definitions.

use axum::Router;

use crate::AppState;
use uplink_core::UploadLimits;

pub mod health;
pub mod upload;

/// Creates the API router with all routes.
pub fn api_routes(limits: &UploadLimits) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(upload::routes(limits))
}
