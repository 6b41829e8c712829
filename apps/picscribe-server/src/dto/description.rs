//! DTOs for the description endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for description generation
///
/// Fields are optional on the wire so a missing field becomes a 400 with the
/// usual message instead of a JSON parse error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionRequest {
    /// Base64-encoded image bytes, without the `data:` prefix
    #[serde(default)]
    #[schema(example = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==")]
    pub image_data: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    #[schema(example = "image/png")]
    pub mime_type: Option<String>,
}

/// Response body for a generated description
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateDescriptionResponse {
    /// Sanitized description, at most 5000 characters
    #[schema(example = "a man (image reference) standing on a pier in a grey wool coat")]
    pub description: String,
}
