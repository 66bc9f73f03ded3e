//! Uplink API Server
//!
//! Main entry point for the upload relay.

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uplink_api::{AppState, create_router};
use uplink_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uplink=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    if !config.webhook_configured() {
        warn!("DISCORD_WEBHOOK_URL is not set! Uploads will fail until it is configured");
        warn!("Create a .env file with your Discord webhook URL");
    }

    info!(
        static_dir = %config.server.static_dir.display(),
        max_file_size = config.upload.max_file_size,
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let port = config.server.port;

    // Create router
    let app = create_router(AppState::new(config));

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    info!("Upload endpoint: http://localhost:{}/api/upload", port);

    axum::serve(listener, app).await?;

    Ok(())
}
