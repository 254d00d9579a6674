use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rcw_auth::error::AuthError;
use rcw_core::error::ValidationError;
use rcw_params::error::ParamsError;
use rcw_storage::error::StorageError;

/// Unified API error type for all route handlers.
///
/// Caller faults become 400 with their message; backend faults become 500
/// with a generic message and the detail goes to the log only.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    /// Adds a top-level `message` to the body of the wrapped error.
    WithMessage {
        message: &'static str,
        source: Box<ApiError>,
    },
}

impl ApiError {
    pub fn with_message(self, message: &'static str) -> Self {
        ApiError::WithMessage {
            message,
            source: Box::new(self),
        }
    }

    fn status_and_error(self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::WithMessage { source, .. } => source.status_and_error(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::WithMessage { message, .. } => Some(*message),
            _ => None,
        };
        let (status, error) = self.status_and_error();

        (status, Json(ErrorBody { message, error })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        if e.is_client_fault() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        if e.is_client_fault() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<ParamsError> for ApiError {
    fn from(e: ParamsError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}
