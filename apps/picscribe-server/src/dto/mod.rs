//! Request and response bodies for the HTTP API

pub mod auth;
pub mod description;
pub mod health;

pub use auth::{VerifyAuthRequest, VerifyAuthResponse};
pub use description::{GenerateDescriptionRequest, GenerateDescriptionResponse};
pub use health::HealthResponse;

use serde::Serialize;
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Image data and mimeType are required")]
    pub error: String,
}
