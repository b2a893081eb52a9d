//! Database Module
//!
//! Embedded SurrealDB storage: connection setup and schema application.

pub mod models;
pub mod repository;
mod schema;

use shared::error::{AppError, AppResult};
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "knihomat";
const DATABASE: &str = "marketplace";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk store at `path` and apply the schema
    pub async fn open(path: &Path) -> AppResult<Self> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let service = Self::prepare(db).await?;
        tracing::info!(path = %path.display(), "database opened (embedded SurrealDB)");
        Ok(service)
    }

    /// Open an in-memory store (tests)
    pub async fn open_in_memory() -> AppResult<Self> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> AppResult<Self> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        schema::apply(&db).await?;
        Ok(Self { db })
    }
}
