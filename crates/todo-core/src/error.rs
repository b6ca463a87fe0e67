//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the todo API.
///
/// The repository never recovers or retries; every failure propagates
/// unchanged to the handler layer, which is the sole translator from domain
/// error to transport status.
#[derive(Error, Debug)]
pub enum TodoError {
    /// No row with the given id.
    #[error("no todo found with id: {id}")]
    NotFound { id: i64 },

    /// Malformed path or body input.
    #[error("{0}")]
    Validation(String),

    /// Any driver, communication, or query failure from the store.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Process-level failure (bind, serve, serialization).
    #[error("internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Returns the HTTP status code for this error.
    ///
    /// A missing row maps to 500, not 404: the transport layer does not
    /// distinguish not-found from a store failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. }
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Creates a not found error for a todo id.
    #[must_use]
    pub const fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for TodoError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error payload: a single human-readable description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error payload from a [`TodoError`].
    #[must_use]
    pub fn from_error(error: &TodoError) -> Self {
        Self {
            error: error.to_string(),
        }
    }

    /// Creates an error payload from a plain message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&TodoError> for ErrorResponse {
    fn from(error: &TodoError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(TodoError::validation("invalid todo ID").status_code(), 400);
        assert_eq!(TodoError::database("connection lost").status_code(), 500);
        assert_eq!(TodoError::configuration("bad url").status_code(), 500);
        assert_eq!(TodoError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_not_found_maps_to_500_not_404() {
        // The transport layer collapses a missing row into a store failure.
        assert_eq!(TodoError::not_found(42).status_code(), 500);
    }

    #[test]
    fn test_not_found_display_carries_id() {
        let err = TodoError::not_found(5);
        assert_eq!(err.to_string(), "no todo found with id: 5");
    }

    #[test]
    fn test_error_response_single_field() {
        let err = TodoError::database("timeout acquiring connection");
        let payload = ErrorResponse::from_error(&err);
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["error"]
            .as_str()
            .unwrap()
            .contains("timeout acquiring connection"));
    }

    #[test]
    fn test_error_response_from_ref() {
        let err = TodoError::validation("invalid todo ID");
        let payload: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(payload.error, "invalid todo ID");
    }
}
