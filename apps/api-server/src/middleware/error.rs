//! Error handling - every failure renders the `{error}` body.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorBody;
use std::fmt;

use quill_core::error::RepoError;

/// Application-level error type mapped onto the API's error contract.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or empty required field - the client's fault.
    Validation(String),
    /// No row for the given id.
    NotFound(String),
    /// Store failure. The message shown to clients is generic; the real
    /// cause is logged where the error is converted.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody::new(message.as_str()))
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                ApiError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                ApiError::Internal("Database error".to_string())
            }
        }
    }
}

/// Malformed or incomplete JSON bodies become 400s with the `{error}`
/// shape instead of actix's default plain-text response.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(format!("Invalid request body: {}", err)).into()
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
