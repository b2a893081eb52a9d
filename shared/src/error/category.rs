//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category derived from the error code range
///
/// - 0xxx: General
/// - 1xxx: Auth
/// - 2xxx: Permission
/// - 4xxx: Order
/// - 6xxx: Book
/// - 7xxx: Conversation
/// - 8xxx: User
/// - 9xxx: System
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Order errors (4xxx)
    Order,
    /// Book errors (6xxx)
    Book,
    /// Conversation errors (7xxx)
    Conversation,
    /// User errors (8xxx)
    User,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from a numeric error code
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            4000..5000 => Self::Order,
            6000..7000 => Self::Book,
            7000..8000 => Self::Conversation,
            8000..9000 => Self::User,
            _ => Self::System,
        }
    }

    /// String name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Order => "order",
            Self::Book => "book",
            Self::Conversation => "conversation",
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_follows_code_range() {
        assert_eq!(ErrorCode::MissingField.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::NotOwner.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::SelfPurchase.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::AlreadySold.category(), ErrorCategory::Book);
        assert_eq!(
            ErrorCode::EmptyMessage.category(),
            ErrorCategory::Conversation
        );
        assert_eq!(ErrorCode::DuplicateEmail.category(), ErrorCategory::User);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
