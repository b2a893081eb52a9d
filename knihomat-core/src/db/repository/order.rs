//! Order Repository, the order/transaction engine
//!
//! `create` is the one operation in the system with a hard atomicity
//! requirement: the order insert and the sold-flag flip commit together
//! or not at all. The whole check-and-set runs inside a single
//! SurrealQL transaction, so two concurrent buyers can never both win
//! the same book; the loser observes `is_sold` and fails with
//! `AlreadySold`.

use super::{BaseRepository, db_error};
use crate::db::models::{Order, OrderCreate, OrderId, UserId};
use crate::utils::time;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderStatus, PurchaseView, SaleView};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use uuid::Uuid;

/// Preconditions are checked in order inside the transaction; the
/// first failure aborts it and leaves the pre-call state untouched.
const CREATE_ORDER: &str = r#"
BEGIN TRANSACTION;
LET $book_row = (SELECT * FROM $book)[0];
IF $book_row == NONE { THROW "book_not_found" };
IF $book_row.is_sold { THROW "already_sold" };
IF $book_row.seller == $buyer { THROW "self_purchase" };
UPDATE $book SET is_sold = true;
CREATE $order SET
    book = $book,
    buyer = $buyer,
    seller = $book_row.seller,
    order_status = 'pending',
    total_price = $book_row.price,
    buyer_address = $address,
    buyer_phone = $phone,
    created_at = $now,
    completed_at = NONE;
COMMIT TRANSACTION;
"#;

/// Commit conflicts between concurrent transactions are retried; a
/// retry then observes the committed sold flag and fails cleanly.
const MAX_COMMIT_RETRIES: usize = 3;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an order: snapshot the price, insert the `pending` row
    /// and mark the book sold, atomically
    pub async fn create(&self, data: OrderCreate) -> AppResult<Order> {
        let address = data.address.trim();
        let phone = data.phone.trim();
        if address.is_empty() || phone.is_empty() {
            return Err(AppError::new(ErrorCode::MissingField));
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            let order_id =
                RecordId::from_table_key("purchase_order", Uuid::new_v4().simple().to_string());
            let result = self
                .base
                .db()
                .query(CREATE_ORDER)
                .bind(("book", data.book_id.clone()))
                .bind(("buyer", data.buyer.clone()))
                .bind(("order", order_id.clone()))
                .bind(("address", address.to_string()))
                .bind(("phone", phone.to_string()))
                .bind(("now", time::now_millis()))
                .await
                .map_err(db_error)?;

            match take_transaction_error(result) {
                None => {
                    let order: Option<Order> =
                        self.base.db().select(order_id).await.map_err(db_error)?;
                    return order.ok_or_else(|| AppError::database("order row not committed"));
                }
                Some(err) if is_commit_conflict(&err) && attempt < MAX_COMMIT_RETRIES => {
                    tracing::debug!(attempt, "order transaction conflict, retrying");
                    continue;
                }
                Some(err) => return Err(map_create_error(err)),
            }
        }
    }

    /// Set the order status
    ///
    /// Transition legality is not validated; re-applying the current
    /// status is a no-op that never errors.
    /// Reaching `completed` stamps the completion timestamp.
    pub async fn update_status(&self, id: &OrderId, new_status: OrderStatus) -> AppResult<()> {
        if self.find_by_id(id).await?.is_none() {
            return Err(AppError::new(ErrorCode::OrderNotFound));
        }

        let statement = if new_status == OrderStatus::Completed {
            "UPDATE $order SET order_status = $status, completed_at = $now"
        } else {
            "UPDATE $order SET order_status = $status"
        };
        self.base
            .db()
            .query(statement)
            .bind(("order", id.clone()))
            .bind(("status", new_status))
            .bind(("now", time::now_millis()))
            .await
            .map_err(db_error)?
            .check()
            .map_err(db_error)?;
        Ok(())
    }

    /// Find an order by id
    pub async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
        self.base.db().select(id.clone()).await.map_err(db_error)
    }

    /// A buyer's purchases, newest first, with no seller contact beyond
    /// the name
    pub async fn purchases(&self, buyer: &UserId) -> AppResult<Vec<PurchaseView>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    book.title AS book_title,
                    book.author AS book_author,
                    total_price,
                    order_status AS status,
                    created_at,
                    seller.name AS seller_name
                FROM purchase_order WHERE buyer = $user
                ORDER BY created_at DESC"#,
            )
            .bind(("user", buyer.clone()))
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }

    /// A seller's sales, newest first, including the buyer's delivery
    /// address and phone for fulfillment
    pub async fn sales(&self, seller: &UserId) -> AppResult<Vec<SaleView>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT
                    <string>id AS id,
                    book.title AS book_title,
                    book.author AS book_author,
                    total_price,
                    order_status AS status,
                    created_at,
                    buyer.name AS buyer_name,
                    buyer_address,
                    buyer_phone
                FROM purchase_order WHERE seller = $user
                ORDER BY created_at DESC"#,
            )
            .bind(("user", seller.clone()))
            .await
            .map_err(db_error)?;
        result.take(0).map_err(db_error)
    }
}

/// Map an error thrown inside the create transaction onto the typed
/// precondition failures; anything unrecognized stays a storage error
fn map_create_error(err: surrealdb::Error) -> AppError {
    let msg = err.to_string();
    if msg.contains("book_not_found") {
        return AppError::new(ErrorCode::BookNotFound);
    }
    if msg.contains("already_sold") {
        return AppError::new(ErrorCode::AlreadySold);
    }
    if msg.contains("self_purchase") {
        return AppError::new(ErrorCode::SelfPurchase);
    }
    db_error(err)
}

/// Extract the meaningful error from a multi-statement transaction
/// response. `Response::check` surfaces the error of the lowest
/// statement index, but when a transaction aborts every statement
/// reports the generic "query was not executed" error except the one
/// that actually failed (e.g. a THROW) — prefer that one.
fn take_transaction_error(mut response: surrealdb::Response) -> Option<surrealdb::Error> {
    let mut errors: Vec<surrealdb::Error> = response.take_errors().into_values().collect();
    if errors.is_empty() {
        return None;
    }
    let idx = errors
        .iter()
        .position(|e| !e.to_string().contains("was not executed"))
        .unwrap_or(0);
    Some(errors.swap_remove(idx))
}

fn is_commit_conflict(err: &surrealdb::Error) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("conflict") || msg.contains("retry")
}
