//! Conversation Repository
//!
//! Conversation identity is the (book, buyer, seller) triple; message
//! history is append-only with a persistent monotonic sequence number
//! as the insertion-order tiebreak.

use super::{BaseRepository, db_error};
use crate::db::models::{BookId, Conversation, ConversationId, Message, UserId};
use crate::utils::time;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ConversationInfo, ConversationSummary, MessageView};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use uuid::Uuid;

/// Appends a message and advances the per-table sequence counter in
/// one transaction, so `(created_at, seq)` totally orders the history.
const POST_MESSAGE: &str = r#"
BEGIN TRANSACTION;
UPSERT seq:message SET n = (n ?? 0) + 1;
LET $n = (SELECT VALUE n FROM ONLY seq:message);
CREATE $msg SET
    conversation = $conversation,
    sender = $sender,
    message = $body,
    seq = $n,
    created_at = $now,
    is_read = false;
COMMIT TRANSACTION;
"#;

#[derive(Clone)]
pub struct ConversationRepository {
    base: BaseRepository,
}

impl ConversationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch the conversation for a (book, buyer, seller) triple,
    /// creating it on first contact
    ///
    /// Idempotent: repeated calls with the same triple return the same
    /// row. buyer == seller is not rejected here; screens suppress the
    /// contact action on the user's own listings.
    pub async fn get_or_create(
        &self,
        book: BookId,
        buyer: UserId,
        seller: UserId,
    ) -> AppResult<Conversation> {
        if let Some(existing) = self.find_by_triple(&book, &buyer, &seller).await? {
            return Ok(existing);
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE conversation SET
                    book = $book,
                    buyer = $buyer,
                    seller = $seller,
                    created_at = $now
                RETURN AFTER"#,
            )
            .bind(("book", book.clone()))
            .bind(("buyer", buyer.clone()))
            .bind(("seller", seller.clone()))
            .bind(("now", time::now_millis()))
            .await
            .map_err(db_error)?;

        match result.take::<Vec<Conversation>>(0) {
            Ok(rows) => rows
                .into_iter()
                .next()
                .ok_or_else(|| AppError::database("conversation row not returned")),
            // lost a race: the unique triple index rejected the insert,
            // so the winner's row is the one to return
            Err(e) if e.to_string().contains("conversation_triple") => self
                .find_by_triple(&book, &buyer, &seller)
                .await?
                .ok_or_else(|| AppError::database("conversation missing after index conflict")),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn find_by_triple(
        &self,
        book: &BookId,
        buyer: &UserId,
        seller: &UserId,
    ) -> AppResult<Option<Conversation>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT * FROM conversation
                WHERE book = $book AND buyer = $buyer AND seller = $seller
                LIMIT 1"#,
            )
            .bind(("book", book.clone()))
            .bind(("buyer", buyer.clone()))
            .bind(("seller", seller.clone()))
            .await
            .map_err(db_error)?;
        let rows: Vec<Conversation> = result.take(0).map_err(db_error)?;
        Ok(rows.into_iter().next())
    }

    /// Find a conversation by id
    pub async fn find_by_id(&self, id: &ConversationId) -> AppResult<Option<Conversation>> {
        self.base.db().select(id.clone()).await.map_err(db_error)
    }

    /// Append a message to a conversation
    pub async fn post_message(
        &self,
        conversation: ConversationId,
        sender: UserId,
        text: &str,
    ) -> AppResult<Message> {
        let body = text.trim();
        if body.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyMessage));
        }
        if self.find_by_id(&conversation).await?.is_none() {
            return Err(AppError::new(ErrorCode::ConversationNotFound));
        }

        let msg_id = RecordId::from_table_key("message", Uuid::new_v4().simple().to_string());
        self.base
            .db()
            .query(POST_MESSAGE)
            .bind(("msg", msg_id.clone()))
            .bind(("conversation", conversation))
            .bind(("sender", sender))
            .bind(("body", body.to_string()))
            .bind(("now", time::now_millis()))
            .await
            .map_err(db_error)?
            .check()
            .map_err(db_error)?;

        let message: Option<Message> = self.base.db().select(msg_id).await.map_err(db_error)?;
        message.ok_or_else(|| AppError::database("message row not committed"))
    }

    /// Full message history of a conversation, ascending by timestamp
    /// with ties broken by post order
    pub async fn messages(&self, conversation: &ConversationId) -> AppResult<Vec<MessageView>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    message,
                    <string>sender AS sender_id,
                    sender.name AS sender_name,
                    seq,
                    created_at,
                    is_read
                FROM message WHERE conversation = $conversation
                ORDER BY created_at ASC, seq ASC"#,
            )
            .bind(("conversation", conversation.clone()))
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }

    /// All conversations where the user is buyer or seller, newest
    /// first, annotated with the counterpart's name and the caller's
    /// role
    pub async fn conversations_for_user(
        &self,
        user: &UserId,
    ) -> AppResult<Vec<ConversationSummary>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    book.title AS book_title,
                    book.author AS book_author,
                    (IF buyer = $user { seller.name } ELSE { buyer.name }) AS counterpart_name,
                    (IF buyer = $user { 'buyer' } ELSE { 'seller' }) AS role,
                    created_at
                FROM conversation
                WHERE buyer = $user OR seller = $user
                ORDER BY created_at DESC"#,
            )
            .bind(("user", user.clone()))
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }

    /// Chat header info: the book under discussion and both parties
    pub async fn info(&self, id: &ConversationId) -> AppResult<ConversationInfo> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    <string>book AS book_id,
                    book.title AS book_title,
                    book.author AS book_author,
                    book.price AS book_price,
                    seller.name AS seller_name,
                    buyer.name AS buyer_name
                FROM conversation WHERE id = $id LIMIT 1"#,
            )
            .bind(("id", id.clone()))
            .await
            .map_err(db_error)?;
        let rows: Vec<ConversationInfo> = result.take(0).map_err(db_error)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::new(ErrorCode::ConversationNotFound))
    }
}
