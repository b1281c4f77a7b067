// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure of the upload, delete and gallery paths
/// Each variant maps to an HTTP status code and a JSON error body
#[derive(Error, Debug)]
pub enum HotelError {
    /// Malformed input, wrong MIME class, oversized video, missing fields
    #[error("{0}")]
    ValidationError(String),

    /// Admin check failed (missing or wrong token)
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    /// Media host credentials missing; carries the missing variable names
    #[error("Cloudinary configuration missing: {}", .0.join(", "))]
    ConfigurationError(Vec<String>),

    /// Media host transport or business failure
    #[error("{message}")]
    UpstreamError {
        message: String,
        detail: Option<String>,
    },

    /// Media host answered a destroy call with something other than "ok"
    #[error("Failed to delete file from Cloudinary")]
    DeleteRejected { result: String },

    /// Generic message only; driver detail stays in the server log
    #[error("{0}")]
    DatabaseError(String),
}

impl HotelError {
    /// Shorthand for an upstream failure with a detail string
    pub fn upstream(message: impl Into<String>, detail: impl ToString) -> Self {
        HotelError::UpstreamError {
            message: message.into(),
            detail: Some(detail.to_string()),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            HotelError::ValidationError(_) => "VALIDATION_ERROR",
            HotelError::Unauthorized => "UNAUTHORIZED",
            HotelError::NotFound(_) => "NOT_FOUND",
            HotelError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            HotelError::UpstreamError { .. } => "UPSTREAM_ERROR",
            HotelError::DeleteRejected { .. } => "DELETE_REJECTED",
            HotelError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}

/// Convert HotelError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for HotelError {
    fn error_response(&self) -> HttpResponse {
        let mut error = json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        match self {
            HotelError::UpstreamError {
                detail: Some(detail),
                ..
            } => {
                error["detail"] = json!(detail);
            }
            HotelError::DeleteRejected { result } => {
                error["result"] = json!(result);
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": error
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            HotelError::ValidationError(_) => StatusCode::BAD_REQUEST,
            HotelError::Unauthorized => StatusCode::UNAUTHORIZED,
            HotelError::NotFound(_) => StatusCode::NOT_FOUND,
            HotelError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HotelError::UpstreamError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HotelError::DeleteRejected { .. } => StatusCode::BAD_REQUEST,
            HotelError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            HotelError::ValidationError("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(HotelError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            HotelError::DeleteRejected { result: "not found".into() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HotelError::ConfigurationError(vec!["CLOUDINARY_API_KEY".into()]).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_configuration_message_lists_missing() {
        let err = HotelError::ConfigurationError(vec![
            "CLOUDINARY_API_KEY".to_string(),
            "CLOUDINARY_API_SECRET".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Cloudinary configuration missing: CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET"
        );
    }
}
