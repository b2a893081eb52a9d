//! Error type and result alias

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use super::kind::ErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// Every failure crossing the store boundary is converted into this
/// type; raw storage errors never propagate as panics.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Result type for all core operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the domain category for this error
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Get the recovery kind for this error
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an unauthenticated error
    pub fn unauthenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid credentials error with a unified message
    ///
    /// Unknown email and wrong password both produce this error to
    /// prevent account enumeration.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_comes_from_code() {
        let err = AppError::new(ErrorCode::AlreadySold);
        assert_eq!(err.message, "Book has already been sold");
        assert_eq!(err.to_string(), "Book has already been sold");
    }

    #[test]
    fn custom_message_keeps_code() {
        let err = AppError::with_message(ErrorCode::InvalidPrice, "price was -3");
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert_eq!(err.message, "price was -3");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
