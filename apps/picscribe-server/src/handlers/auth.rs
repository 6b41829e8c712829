//! Password check handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::{
    dto::{VerifyAuthRequest, VerifyAuthResponse},
    AppState,
};

/// Check a password against the configured shared secret
///
/// A body that fails to parse counts as no password at all.
#[utoipa::path(
    post,
    path = "/api/verify-auth",
    request_body = VerifyAuthRequest,
    responses(
        (status = 200, description = "Password accepted, or no password configured", body = VerifyAuthResponse),
        (status = 401, description = "Password rejected", body = VerifyAuthResponse)
    ),
    tag = "auth"
)]
pub async fn verify_auth_handler(
    State(state): State<AppState>,
    payload: Result<Json<VerifyAuthRequest>, JsonRejection>,
) -> (StatusCode, Json<VerifyAuthResponse>) {
    let password = payload.ok().and_then(|Json(body)| body.password);
    let valid = state.auth_gate.verify(password.as_deref());

    if valid {
        debug!(auth_enabled = state.auth_gate.is_enabled(), "Password check passed");
        (StatusCode::OK, Json(VerifyAuthResponse { valid }))
    } else {
        warn!("Password check failed");
        (StatusCode::UNAUTHORIZED, Json(VerifyAuthResponse { valid }))
    }
}
