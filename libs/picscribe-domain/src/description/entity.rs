//! Domain entities for description generation
//!
//! Both entities are request-scoped: they are built when an HTTP request
//! arrives and dropped once the response is sent.

use serde::Serialize;

use super::error::{DescriptionError, Result};
use super::sanitize::sanitize_description;

/// An image submitted for description
///
/// Construction validates that both fields are present, so a value of this
/// type always carries a non-empty payload and MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Base64-encoded image bytes (no `data:` URL prefix)
    image_data: String,

    /// MIME type of the image, e.g. `image/png`
    mime_type: String,
}

impl GenerationRequest {
    /// Create a validated request
    ///
    /// # Errors
    ///
    /// Returns `DescriptionError::Validation` if either field is empty
    pub fn new(image_data: impl Into<String>, mime_type: impl Into<String>) -> Result<Self> {
        let image_data = image_data.into();
        let mime_type = mime_type.into();

        if image_data.is_empty() || mime_type.is_empty() {
            return Err(DescriptionError::missing_fields());
        }

        Ok(Self {
            image_data,
            mime_type,
        })
    }

    /// Build a request from optional wire fields
    ///
    /// A missing field is treated the same as an empty one.
    pub fn from_parts(image_data: Option<String>, mime_type: Option<String>) -> Result<Self> {
        match (image_data, mime_type) {
            (Some(image_data), Some(mime_type)) => Self::new(image_data, mime_type),
            _ => Err(DescriptionError::missing_fields()),
        }
    }

    /// Get the base64 image payload
    pub fn image_data(&self) -> &str {
        &self.image_data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// A sanitized description ready to be returned to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    description: String,
}

impl GenerationResult {
    /// Sanitize raw provider text into a result
    pub fn from_raw(raw: &str) -> Self {
        Self {
            description: sanitize_description(raw),
        }
    }

    /// Get the description text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Consume the result and return the description text
    pub fn into_description(self) -> String {
        self.description
    }
}
