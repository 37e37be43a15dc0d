use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_core::{classify::ErrorBody, validate::ValidationError};

/// Failures that reach the client as JSON error bodies.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0:?}")]
    InvalidInput(Option<String>),

    #[error("route not found")]
    RouteNotFound,

    #[error("classification failed for {0:?}")]
    Internal(Option<String>),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.raw_input().map(str::to_string))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidInput(raw) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::invalid_input(raw.as_deref()),
            ),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, ErrorBody::not_found()),
            ApiError::Internal(raw) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::invalid_input(raw.as_deref()),
            ),
        };

        (status, Json(body)).into_response()
    }
}
