//! Repository Module
//!
//! Typed data access over the embedded SurrealDB store. One repository
//! per entity; every storage failure is converted into the unified
//! [`AppError`] at this boundary; raw database errors never propagate
//! further up.

pub mod book;
pub mod conversation;
pub mod order;
pub mod user;

pub use book::BookRepository;
pub use conversation::ConversationRepository;
pub use order::OrderRepository;
pub use user::UserRepository;

use shared::error::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Convert a storage failure into the typed error, logging it once at
/// the boundary
pub(crate) fn db_error(err: surrealdb::Error) -> AppError {
    tracing::error!(target: "db", error = %err, "database operation failed");
    AppError::database(err.to_string())
}
