//! PicScribe server
//!
//! HTTP front for the description service: proxies images to the upstream
//! provider, gates access with an optional shared secret, and serves the
//! static frontend with a single-page-app fallback.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use picscribe_domain::{AuthGate, DescriptionService};
use picscribe_gemini::GeminiClient;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;

/// Name of the document served for unmatched GET paths
pub const INDEX_DOCUMENT: &str = "index.html";

/// Largest accepted request body (10 MB)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub description_service: Arc<DescriptionService<GeminiClient>>,
    pub auth_gate: Arc<AuthGate>,
    pub assets: ServeDir<ServeFile>,
}

impl AppState {
    /// Build the state from configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        let generator = GeminiClient::new(config.gemini.clone());
        let index = config.static_dir.join(INDEX_DOCUMENT);

        Self {
            description_service: Arc::new(DescriptionService::new(generator)),
            auth_gate: Arc::new(AuthGate::new(config.app_password.clone())),
            assets: ServeDir::new(&config.static_dir).fallback(ServeFile::new(index)),
        }
    }
}
