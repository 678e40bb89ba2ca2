/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * - `ValidationError` - empty or missing fields, malformed cursors (400)
 * - `AuthError` - missing or invalid credentials (401)
 * - `NotFoundError` - unknown message or user id (404)
 * - `MethodNotAllowed` - known path, unsupported method (405)
 * - `StateError` / `InternalError` - unexpected failures (500)
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use chat_feed::backend::error::BackendError;
///
/// let err = BackendError::auth("Unauthorized");
/// assert_eq!(err.status_code().as_u16(), 401);
///
/// let err = BackendError::not_found("User not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request failed validation before touching any state
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Missing or invalid credentials
    #[error("Auth error: {message}")]
    AuthError {
        /// Human-readable error message
        message: String,
    },

    /// Unknown id
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// Shared state could not be accessed (e.g. a poisoned lock)
    #[error("State error: {message}")]
    StateError {
        /// Human-readable error message
        message: String,
    },

    /// Any other unexpected failure
    #[error("Internal error: {message}")]
    InternalError {
        /// Human-readable error message
        message: String,
    },

    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl BackendError {
    /// Create a new validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(SharedError::validation(field, message))
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::AuthError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request (500 for shared serialization failures)
    /// - `AuthError` - 401 Unauthorized
    /// - `NotFoundError` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `StateError`, `InternalError` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::AuthError { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Message shown to the client
    ///
    /// Server-side failures get a generic message; details stay in the log.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::AuthError { message } => message.clone(),
            Self::NotFoundError { message } => message.clone(),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = BackendError::validation("sender", "Empty sender");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Empty sender");
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::auth("Unauthorized").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::not_found("User not found").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::state("lock poisoned").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            BackendError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(BackendError::MethodNotAllowed.message(), "Method not allowed");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let error = BackendError::state("message log lock poisoned");
        assert_eq!(error.message(), "Internal server error");
        assert!(error.to_string().contains("poisoned"));
    }

    #[test]
    fn test_from_shared_error() {
        let backend_error: BackendError = SharedError::validation("text", "Empty text").into();
        match backend_error {
            BackendError::Validation(_) => {}
            _ => panic!("Expected Validation variant"),
        }
    }

    #[test]
    fn test_shared_serialization_is_server_error() {
        let error: BackendError = SharedError::serialization("bad").into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
