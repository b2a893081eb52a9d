//! Standardized error codes

use serde::{Deserialize, Serialize};

/// Error codes for every failure the core can report
///
/// Codes are grouped by domain via their numeric range; the range
/// determines the [`ErrorCategory`](super::ErrorCategory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing or blank
    MissingField = 7,

    // ==================== 1xxx: Auth ====================
    /// No authenticated user in the session context
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,

    // ==================== 2xxx: Permission ====================
    /// Requester is not the owner of the resource
    NotOwner = 2001,

    // ==================== 4xxx: Order ====================
    /// Order does not exist
    OrderNotFound = 4001,
    /// Buyer attempted to purchase their own listing
    SelfPurchase = 4002,

    // ==================== 6xxx: Book ====================
    /// Book does not exist
    BookNotFound = 6001,
    /// Book has already been sold
    AlreadySold = 6002,
    /// Price is zero or negative
    InvalidPrice = 6003,

    // ==================== 7xxx: Conversation ====================
    /// Conversation does not exist
    ConversationNotFound = 7001,
    /// Message body is blank after trimming
    EmptyMessage = 7002,

    // ==================== 8xxx: User ====================
    /// User does not exist
    UserNotFound = 8001,
    /// Email address is already registered
    DuplicateEmail = 8002,

    // ==================== 9xxx: System ====================
    /// Underlying store unreachable or corrupted
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::MissingField => "Required field is missing",
            Self::NotAuthenticated => "Please login first",
            Self::InvalidCredentials => "Invalid email or password",
            Self::NotOwner => "You do not own this listing",
            Self::OrderNotFound => "Order not found",
            Self::SelfPurchase => "You cannot buy your own book",
            Self::BookNotFound => "Book not found",
            Self::AlreadySold => "Book has already been sold",
            Self::InvalidPrice => "Price must be positive",
            Self::ConversationNotFound => "Conversation not found",
            Self::EmptyMessage => "Message cannot be empty",
            Self::UserNotFound => "User not found",
            Self::DuplicateEmail => "Email is already registered",
            Self::DatabaseError => "Database error",
        }
    }
}
