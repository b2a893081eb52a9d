//! Conversation Model

use super::book::BookId;
use super::serde_helpers;
use super::user::UserId;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Conversation ID type
pub type ConversationId = RecordId;

/// Conversation matching the `conversation` table
///
/// Identity is the (book, buyer, seller) triple; the unique index
/// `conversation_triple` guarantees at most one row per triple.
/// Conversations are created lazily on first contact and never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ConversationId>,
    #[serde(with = "serde_helpers::record_id")]
    pub book: BookId,
    #[serde(with = "serde_helpers::record_id")]
    pub buyer: UserId,
    #[serde(with = "serde_helpers::record_id")]
    pub seller: UserId,
    pub created_at: i64,
}
