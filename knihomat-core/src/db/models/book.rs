//! Book Model

use super::serde_helpers;
use super::user::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Book ID type
pub type BookId = RecordId;

/// Book listing matching the `book` table
///
/// Owned exclusively by its seller. `is_sold` is flipped either by the
/// seller (manual override) or by the order engine as a side effect of
/// order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub condition: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "serde_helpers::record_id")]
    pub seller: UserId,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_sold: bool,
    pub created_at: i64,
}

/// Create book payload
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub condition: String,
    pub description: String,
}
