//! HTTP error types for the Repodex server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use repodex_usecase::ServiceError;
use thiserror::Error;

/// Error wrapper for converting request and service failures to HTTP responses.
///
/// Client errors (400) carry `{ "error": "..." }`, missing resources (404)
/// carry `{ "message": "..." }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("This is an invalid repository id!")]
    InvalidId,

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    MalformedQuery(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::MalformedBody(_) | ApiError::MalformedQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Service(err) => match err {
                ServiceError::InvalidUrl | ServiceError::MissingRequiredFields => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = if status == StatusCode::NOT_FOUND {
            serde_json::json!({ "message": message })
        } else {
            serde_json::json!({ "error": message })
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}
