//! # REST API Errors
//!
//! Error types for the REST API module. Every error kind maps to exactly one
//! status code, applied once at the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::ErrorEnvelope;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Create body lacks a required field, or it is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Search query parameter absent or blank after trimming
    #[error("Search query parameter 'q' is required")]
    MissingQuery,

    /// Id does not resolve to a book
    #[error("{0}")]
    NotFound(#[from] StoreError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unanticipated fault; carries an operation-scoped message and nothing
    /// about the fault itself
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorEnvelope::new(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingField("title").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingQuery.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::NotFound(StoreError::NotFound(99)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("Failed to fetch books").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_propagation() {
        let err = ApiError::from(StoreError::NotFound(99));
        assert_eq!(err.to_string(), "Book with ID 99 not found");
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            ApiError::MissingField("author").to_string(),
            "Missing required field: author"
        );
    }
}
