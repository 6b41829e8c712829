//! JSON API routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{
        auth::verify_auth_handler, description::generate_description_handler,
        health::health_handler,
    },
    AppState,
};

/// Create API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/generate-description", post(generate_description_handler))
        .route("/api/verify-auth", post(verify_auth_handler))
        .route("/api/health", get(health_handler))
}
