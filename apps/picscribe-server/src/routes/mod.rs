//! HTTP routes

pub mod api;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        ErrorResponse, GenerateDescriptionRequest, GenerateDescriptionResponse, HealthResponse,
        VerifyAuthRequest, VerifyAuthResponse,
    },
    error::ApiError,
    handlers, AppState, MAX_BODY_BYTES,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::description::generate_description_handler,
        handlers::auth::verify_auth_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            GenerateDescriptionRequest,
            GenerateDescriptionResponse,
            VerifyAuthRequest,
            VerifyAuthResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "description", description = "Image description endpoints"),
        (name = "auth", description = "Shared password check"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "PicScribe API",
        version = "0.1.0",
        description = "Image description proxy in front of the Gemini API",
        contact(
            name = "PicScribe Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// CORS is open to every origin; any `OPTIONS` request is answered by the
/// CORS layer as a preflight with an empty body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::routes())
        .fallback(handlers::assets::static_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Give axum's bare 405 responses the same JSON body as other errors
///
/// The `Allow` header set by the method router is kept.
async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        json.headers_mut().insert(header::ALLOW, allow.clone());
    }
    json
}
