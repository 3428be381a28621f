//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bistro_domain::error::BistroError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler can fail with, mapped to an HTTP response with an
/// appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by an application service.
    Domain(BistroError),
    /// The request body is not valid JSON for the target type.
    Decode(serde_json::Error),
    /// The request body could not be read.
    Body(BytesRejection),
}

impl From<BistroError> for ApiError {
    fn from(err: BistroError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(BistroError::InvalidParam(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(BistroError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(BistroError::Storage(err)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Decode(err) => {
                tracing::debug!(error = %err, "rejected request body");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
