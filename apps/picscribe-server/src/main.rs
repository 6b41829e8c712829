//! PicScribe - Image Description Server
//!
//! Serves the upload page and proxies images to the Gemini API with a fixed
//! prompt, returning a sanitized text description.

use anyhow::{Context, Result};
use picscribe_server::{config::ServerConfig, routes, telemetry, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    // Initialize tracing
    telemetry::init_tracing(config.log_format);

    info!("Starting PicScribe server");

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY not set, description requests will fail");
    }
    if !config.static_dir.is_dir() {
        warn!(static_dir = %config.static_dir.display(), "Static directory not found");
    }

    info!(
        auth_enabled = config.app_password.is_some(),
        static_dir = %config.static_dir.display(),
        model = %config.gemini.model,
        "Configuration loaded"
    );

    // Create shared application state
    let state = AppState::from_config(&config);

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
