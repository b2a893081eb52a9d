//! Schema definition
//!
//! Tables stay schemaless; the Rust models in [`super::models`] are the
//! source of truth for row shapes. Indexes enforce the two uniqueness
//! invariants (one account per email, one conversation per
//! book/buyer/seller triple) and back the hot orderings.

use super::repository::db_error;
use shared::error::AppResult;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const SCHEMA: &str = r#"
DEFINE INDEX IF NOT EXISTS user_email ON user FIELDS email UNIQUE;
DEFINE INDEX IF NOT EXISTS conversation_triple ON conversation FIELDS book, buyer, seller UNIQUE;
DEFINE INDEX IF NOT EXISTS book_created_at ON book FIELDS created_at;
DEFINE INDEX IF NOT EXISTS order_created_at ON purchase_order FIELDS created_at;
DEFINE INDEX IF NOT EXISTS message_ordering ON message FIELDS created_at, seq;
"#;

/// Apply index definitions; idempotent across restarts
pub(crate) async fn apply(db: &Surreal<Db>) -> AppResult<()> {
    db.query(SCHEMA)
        .await
        .map_err(db_error)?
        .check()
        .map_err(db_error)?;
    Ok(())
}
