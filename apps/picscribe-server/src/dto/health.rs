use serde::Serialize;
use utoipa::ToSchema;

/// Health check response body
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    /// ISO 8601 UTC timestamp with millisecond precision
    #[schema(example = "2026-10-19T08:30:00.000Z")]
    pub timestamp: String,
}
