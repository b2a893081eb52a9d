//! View models returned to the presentation layer
//!
//! Every screen consumes one of these named structs instead of a
//! positional row tuple, so a reordered projection cannot silently
//! corrupt a call site. Record ids are carried as `"table:id"`
//! strings.

mod order;

pub use order::OrderStatus;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Authenticated user identity (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Role of a user within a conversation or order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Buyer,
    Seller,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }
}

/// Listing row for the browse and search screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookListing {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub condition: String,
    #[serde(default)]
    pub description: String,
    pub seller_name: String,
    pub created_at: i64,
}

/// Full book detail for the purchase screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub condition: String,
    #[serde(default)]
    pub description: String,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_email: String,
    pub is_sold: bool,
    pub created_at: i64,
}

/// Conversation list entry, annotated with the counterpart and the
/// caller's role in it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub book_title: String,
    pub book_author: String,
    pub counterpart_name: String,
    pub role: UserRole,
    pub created_at: i64,
}

/// Chat header info: the book under discussion and both parties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationInfo {
    pub id: String,
    pub book_id: String,
    pub book_title: String,
    pub book_author: String,
    pub book_price: Decimal,
    pub seller_name: String,
    pub buyer_name: String,
}

/// Single message row, ordered by `(created_at, seq)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageView {
    pub id: String,
    pub message: String,
    pub sender_id: String,
    pub sender_name: String,
    pub seq: i64,
    pub created_at: i64,
    #[serde(default)]
    pub is_read: bool,
}

/// A buyer's view of their own purchase
///
/// Deliberately excludes any seller contact beyond the name; the
/// fulfillment asymmetry lives in [`SaleView`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseView {
    pub id: String,
    pub book_title: String,
    pub book_author: String,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: i64,
    pub seller_name: String,
}

/// A seller's view of one of their sales
///
/// Includes the buyer's delivery address and phone: sellers need the
/// fulfillment info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleView {
    pub id: String,
    pub book_title: String,
    pub book_author: String,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: i64,
    pub buyer_name: String,
    pub buyer_address: String,
    pub buyer_phone: String,
}
