//! HTTP rendering of `AppError`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use launchpad_core::error::{AppError, ErrorKind};

/// `AppError` carried to the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub message: String,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = status_for(err.kind);

        // Server-side details stay in the log.
        let body = if err.kind.is_client_error() {
            ApiErrorResponse {
                error: err.kind.code().to_string(),
                message: err.message,
            }
        } else {
            tracing::error!(error = %err, "Request failed with a server error");
            ApiErrorResponse {
                error: ErrorKind::Internal.code().to_string(),
                message: "Internal server error".to_string(),
            }
        };

        (status, Json(body)).into_response()
    }
}
