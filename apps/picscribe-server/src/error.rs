//! HTTP-facing error type
//!
//! Every failure leaving a handler goes through `ApiError`, which renders a
//! `{"error": message}` JSON body with the matching status code.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use picscribe_domain::DescriptionError;
use thiserror::Error;

use crate::dto::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Description(#[from] DescriptionError),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Description(err) => match err {
                DescriptionError::Validation(_) => StatusCode::BAD_REQUEST,
                DescriptionError::Unauthorized => StatusCode::UNAUTHORIZED,
                DescriptionError::Timeout => StatusCode::REQUEST_TIMEOUT,
                DescriptionError::Config(_)
                | DescriptionError::UpstreamFailure(_)
                | DescriptionError::EmptyResult => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Description(DescriptionError::validation(rejection.body_text()))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
