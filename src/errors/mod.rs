//! Error handling module for the campus API.
//!
//! Every failure a handler can produce maps to a status code and a `{type, message}` body.

use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type names as they appear in the `type` field of error bodies.
pub mod kinds {
    pub const ENTITY_NOT_FOUND: &str = "EntityNotFoundException";
    pub const ACCESS_DENIED: &str = "AccessDeniedException";
    pub const BAD_REQUEST: &str = "BadRequest";
    pub const DATABASE_ERROR: &str = "DatabaseError";
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// No entity of `type_name` is stored under `key`.
    #[error("{type_name} with id {key} not found")]
    NotFound { type_name: &'static str, key: String },
    /// Caller lacks the role the operation requires.
    #[error("Access Denied")]
    Forbidden,
    /// Missing or malformed request input
    #[error("{0}")]
    BadRequest(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Build the not-found error for a lookup of `key` in the `type_name` collection.
    pub fn not_found(type_name: &'static str, key: impl Display) -> Self {
        AppError::NotFound {
            type_name,
            key: key.to_string(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the `type` reported in the error body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => kinds::ENTITY_NOT_FOUND,
            AppError::Forbidden => kinds::ACCESS_DENIED,
            AppError::BadRequest(_) => kinds::BAD_REQUEST,
            AppError::Database(_) => kinds::DATABASE_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(err) = &self {
            tracing::error!("Database error: {:?}", err);
        }
        let status = self.status_code();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("UCSBOrgs", "SKI");
        assert_eq!(err.to_string(), "UCSBOrgs with id SKI not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_body_shape() {
        let err = AppError::not_found("MenuItemReview", 7);
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "type": "EntityNotFoundException",
                "message": "MenuItemReview with id 7 not found"
            })
        );
    }

    #[test]
    fn test_forbidden_body() {
        let body = ErrorResponse::from(&AppError::Forbidden);
        assert_eq!(body.kind, "AccessDeniedException");
        assert_eq!(body.message, "Access Denied");
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_is_internal() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "DatabaseError");
    }
}
