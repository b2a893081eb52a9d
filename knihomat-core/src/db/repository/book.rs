//! Book Repository

use super::{BaseRepository, db_error};
use crate::db::models::{Book, BookCreate, BookId, UserId};
use crate::utils::time;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookDetail, BookListing};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct BookRepository {
    base: BaseRepository,
}

impl BookRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new listing owned by `seller`
    pub async fn create(&self, seller: UserId, data: BookCreate) -> AppResult<Book> {
        let title = data.title.trim();
        let author = data.author.trim();
        if title.is_empty() || author.is_empty() {
            return Err(AppError::new(ErrorCode::MissingField));
        }
        if data.price <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::InvalidPrice));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE book SET
                    title = $title,
                    author = $author,
                    price = $price,
                    condition = $condition,
                    description = $description,
                    seller = $seller,
                    is_sold = false,
                    created_at = $now
                RETURN AFTER"#,
            )
            .bind(("title", title.to_string()))
            .bind(("author", author.to_string()))
            .bind(("price", data.price))
            .bind(("condition", data.condition))
            .bind(("description", data.description))
            .bind(("seller", seller))
            .bind(("now", time::now_millis()))
            .await
            .map_err(db_error)?;
        let created: Vec<Book> = result.take(0).map_err(db_error)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| AppError::database("book row not returned"))
    }

    /// All unsold listings, newest first, with the seller name joined
    pub async fn find_available(&self) -> AppResult<Vec<BookListing>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    title,
                    author,
                    price,
                    condition,
                    description,
                    seller.name AS seller_name,
                    created_at
                FROM book WHERE is_sold = false
                ORDER BY created_at DESC"#,
            )
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }

    /// Case-insensitive substring search against title or author,
    /// restricted to unsold listings, newest first
    pub async fn search(&self, query: &str) -> AppResult<Vec<BookListing>> {
        let needle = query.trim().to_lowercase();
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    title,
                    author,
                    price,
                    condition,
                    description,
                    seller.name AS seller_name,
                    created_at
                FROM book
                WHERE is_sold = false
                    AND (string::contains(string::lowercase(title), $q)
                        OR string::contains(string::lowercase(author), $q))
                ORDER BY created_at DESC"#,
            )
            .bind(("q", needle))
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }

    /// All listings of a seller regardless of sold state, newest first
    pub async fn find_by_seller(&self, seller: &UserId) -> AppResult<Vec<Book>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM book WHERE seller = $seller ORDER BY created_at DESC")
            .bind(("seller", seller.clone()))
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }

    /// Find a book by id
    pub async fn find_by_id(&self, id: &BookId) -> AppResult<Option<Book>> {
        self.base.db().select(id.clone()).await.map_err(db_error)
    }

    /// Full detail for the purchase screen, including seller contact
    pub async fn find_detail(&self, id: &BookId) -> AppResult<BookDetail> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    title,
                    author,
                    price,
                    condition,
                    description,
                    <string>seller AS seller_id,
                    seller.name AS seller_name,
                    seller.email AS seller_email,
                    is_sold,
                    created_at
                FROM book WHERE id = $id LIMIT 1"#,
            )
            .bind(("id", id.clone()))
            .await
            .map_err(db_error)?;
        let details: Vec<BookDetail> = result.take(0).map_err(db_error)?;
        details
            .into_iter()
            .next()
            .ok_or_else(|| AppError::new(ErrorCode::BookNotFound))
    }

    /// Resolve the seller of a book
    pub async fn seller_of(&self, id: &BookId) -> AppResult<UserId> {
        let book = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::BookNotFound))?;
        Ok(book.seller)
    }

    /// Delete a listing permanently
    ///
    /// Only the owning seller may delete, and only while the book is
    /// unsold; a sold listing keeps its row for order history.
    pub async fn delete(&self, id: &BookId, requester: &UserId) -> AppResult<()> {
        let book = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::BookNotFound))?;
        if &book.seller != requester {
            return Err(AppError::new(ErrorCode::NotOwner));
        }
        if book.is_sold {
            return Err(AppError::new(ErrorCode::AlreadySold));
        }
        let _: Option<Book> = self.base.db().delete(id.clone()).await.map_err(db_error)?;
        Ok(())
    }

    /// Manual sold-flag override by the owning seller, independent of
    /// the order engine
    ///
    /// A missing book reports `NotOwner` as well: the caller learns
    /// nothing about listings that are not theirs.
    pub async fn set_sold_status(
        &self,
        id: &BookId,
        requester: &UserId,
        sold: bool,
    ) -> AppResult<()> {
        let book = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::NotOwner))?;
        if &book.seller != requester {
            return Err(AppError::new(ErrorCode::NotOwner));
        }
        self.base
            .db()
            .query("UPDATE $book SET is_sold = $sold")
            .bind(("book", id.clone()))
            .bind(("sold", sold))
            .await
            .map_err(db_error)?
            .check()
            .map_err(db_error)?;
        Ok(())
    }
}
