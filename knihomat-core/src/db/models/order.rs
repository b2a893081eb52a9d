//! Order Model

use super::book::BookId;
use super::serde_helpers;
use super::user::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::OrderStatus;
use surrealdb::RecordId;

/// Order ID type
pub type OrderId = RecordId;

/// Order matching the `purchase_order` table (`order` clashes with the
/// ORDER BY keyword in queries)
///
/// `total_price` is a snapshot of the book price at creation time, not
/// a live reference. After creation the only permitted mutation is the
/// status (and the completion timestamp it implies).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<OrderId>,
    #[serde(with = "serde_helpers::record_id")]
    pub book: BookId,
    #[serde(with = "serde_helpers::record_id")]
    pub buyer: UserId,
    #[serde(with = "serde_helpers::record_id")]
    pub seller: UserId,
    pub order_status: OrderStatus,
    pub total_price: Decimal,
    pub buyer_address: String,
    pub buyer_phone: String,
    pub created_at: i64,
    #[serde(default)]
    pub completed_at: Option<i64>,
}

/// Create order payload
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub book_id: BookId,
    pub buyer: UserId,
    pub address: String,
    pub phone: String,
}
