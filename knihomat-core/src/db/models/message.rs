//! Message Model

use super::conversation::ConversationId;
use super::serde_helpers;
use super::user::UserId;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Message ID type
pub type MessageId = RecordId;

/// Message matching the `message` table
///
/// Append-only: messages are never edited or removed. `seq` comes from
/// a persistent counter advanced in the same transaction as the
/// insert, so `(created_at, seq)` is a stable total order even when
/// two messages land in the same millisecond.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<MessageId>,
    #[serde(with = "serde_helpers::record_id")]
    pub conversation: ConversationId,
    #[serde(with = "serde_helpers::record_id")]
    pub sender: UserId,
    pub message: String,
    pub seq: i64,
    pub created_at: i64,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_read: bool,
}
