//! Static frontend assets
//!
//! Any request no API route claims lands here. Files are served from the
//! configured directory with a content type guessed from the extension.
//! Unknown paths get `index.html` with 200 so client-side routing works.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tracing::{debug, warn};

use crate::{error::ApiError, AppState};

pub async fn static_handler(State(state): State<AppState>, request: Request) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        debug!(method = %request.method(), path = %request.uri().path(), "Method not allowed");
        return ApiError::MethodNotAllowed.into_response();
    }

    let path = request.uri().path().to_string();

    match state.assets.oneshot(request).await {
        Ok(response) if response.status() == StatusCode::NOT_FOUND => {
            warn!(path = %path, "Static asset and index document both missing");
            ApiError::NotFound.into_response()
        }
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
