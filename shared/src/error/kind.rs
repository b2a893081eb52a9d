//! Error kind classification
//!
//! While [`ErrorCategory`](super::ErrorCategory) groups codes by domain,
//! `ErrorKind` groups them by what the caller should do about them.

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Recovery-oriented error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input; prompt the user to correct and retry
    Validation,
    /// No authenticated actor, or credentials rejected
    Auth,
    /// Uniqueness or ownership violation; surfaced as a user-facing message
    Conflict,
    /// Referenced entity absent
    NotFound,
    /// Underlying store unreachable or corrupted; not retried automatically
    Storage,
}

impl ErrorCode {
    /// Get the recovery kind for this error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationFailed
            | Self::MissingField
            | Self::InvalidPrice
            | Self::EmptyMessage => ErrorKind::Validation,

            Self::NotAuthenticated | Self::InvalidCredentials => ErrorKind::Auth,

            Self::NotOwner | Self::SelfPurchase | Self::AlreadySold | Self::DuplicateEmail => {
                ErrorKind::Conflict
            }

            Self::OrderNotFound
            | Self::BookNotFound
            | Self::ConversationNotFound
            | Self::UserNotFound => ErrorKind::NotFound,

            Self::DatabaseError => ErrorKind::Storage,
        }
    }
}

impl ErrorKind {
    /// Whether the caller can recover by correcting input and retrying
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Storage)
    }
}
