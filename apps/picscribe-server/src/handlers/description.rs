//! Description handler

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use picscribe_domain::GenerationRequest;
use tracing::{error, info, warn};

use crate::{
    dto::{GenerateDescriptionRequest, GenerateDescriptionResponse},
    error::ApiError,
    AppState,
};

/// Header carrying the shared secret on generation requests
pub const PASSWORD_HEADER: &str = "x-app-password";

/// Generate a description for an uploaded image
///
/// The password is checked before the body is validated or the provider is
/// called, so an unauthorized caller never reaches either.
#[utoipa::path(
    post,
    path = "/api/generate-description",
    request_body = GenerateDescriptionRequest,
    params(
        ("x-app-password" = Option<String>, Header, description = "Shared secret, required when the server has one configured")
    ),
    responses(
        (status = 200, description = "Description generated", body = GenerateDescriptionResponse),
        (status = 400, description = "Missing imageData or mimeType, or malformed JSON", body = crate::dto::ErrorResponse),
        (status = 401, description = "Missing or wrong password", body = crate::dto::ErrorResponse),
        (status = 408, description = "Upstream provider timed out", body = crate::dto::ErrorResponse),
        (status = 413, description = "Request body larger than 10 MB", body = crate::dto::ErrorResponse),
        (status = 500, description = "No API key configured, upstream failure, or empty result", body = crate::dto::ErrorResponse)
    ),
    tag = "description"
)]
pub async fn generate_description_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerateDescriptionRequest>, JsonRejection>,
) -> Result<Json<GenerateDescriptionResponse>, ApiError> {
    let supplied = headers
        .get(PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok());
    if let Err(err) = state.auth_gate.authorize(supplied) {
        warn!(
            password_present = supplied.is_some(),
            "Rejected description request with bad password"
        );
        return Err(err.into());
    }

    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected malformed description request");
        ApiError::from(rejection)
    })?;

    let request = GenerationRequest::from_parts(payload.image_data, payload.mime_type)?;

    info!(
        mime_type = %request.mime_type(),
        image_len = request.image_data().len(),
        "Received description request"
    );
    let started = Instant::now();

    match state.description_service.describe(&request).await {
        Ok(result) => {
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                description_len = result.description().len(),
                "Generated description"
            );
            Ok(Json(GenerateDescriptionResponse {
                description: result.into_description(),
            }))
        }
        Err(err) => {
            error!(
                error = ?err,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Failed to generate description"
            );
            Err(err.into())
        }
    }
}
