//! DTOs for the password check endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for password verification
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct VerifyAuthRequest {
    #[serde(default)]
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

/// Whether the supplied password was accepted
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyAuthResponse {
    pub valid: bool,
}
