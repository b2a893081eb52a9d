//! Application state: the facade consumed by presentation surfaces
//!
//! `AppState` owns the embedded store, one repository per entity and
//! the session context. Screens call these methods with user intent
//! (login, search, message, buy); the facade resolves the actor from
//! the session and forwards to the right store. Every operation that
//! needs an actor fails with `NotAuthenticated` when the session is
//! empty, independent of any checks the screens do themselves.

use crate::core::Config;
use crate::db::DbService;
use crate::db::models::{
    Book, BookCreate, BookId, Conversation, ConversationId, Message, Order, OrderCreate, OrderId,
    UserCreate,
};
use crate::db::repository::{
    BookRepository, ConversationRepository, OrderRepository, UserRepository,
};
use crate::session::{CurrentUser, SessionContext};
use shared::error::{AppError, AppResult};
use shared::models::{
    BookDetail, BookListing, ConversationInfo, ConversationSummary, MessageView, OrderStatus,
    PurchaseView, SaleView, UserIdentity,
};

/// Application state holding the store handle and all repositories
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    db: DbService,
    users: UserRepository,
    books: BookRepository,
    conversations: ConversationRepository,
    orders: OrderRepository,
    session: SessionContext,
}

impl AppState {
    /// Initialize: ensure the work directory layout, open the embedded
    /// store under it and build the repositories
    pub async fn initialize(config: Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::database(format!("Failed to create work directory: {e}")))?;
        let db_path = config.database_dir().join("knihomat.db");
        let db = DbService::open(&db_path).await?;
        Ok(Self::with_db(config, db))
    }

    /// In-memory state for tests
    pub async fn open_in_memory() -> AppResult<Self> {
        let db = DbService::open_in_memory().await?;
        Ok(Self::with_db(Config::with_work_dir("."), db))
    }

    fn with_db(config: Config, db: DbService) -> Self {
        let handle = db.db.clone();
        Self {
            config,
            users: UserRepository::new(handle.clone()),
            books: BookRepository::new(handle.clone()),
            conversations: ConversationRepository::new(handle.clone()),
            orders: OrderRepository::new(handle),
            session: SessionContext::new(),
            db,
        }
    }

    /// Session context for the active client
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Direct store handle (repository-level tests)
    pub fn db(&self) -> &DbService {
        &self.db
    }

    // ==================== Identity ====================

    /// Register a new account
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<()> {
        self.users
            .register(UserCreate {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        tracing::info!(email, "account registered");
        Ok(())
    }

    /// Authenticate and populate the session
    pub async fn login(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        let user = self.users.authenticate(email, password).await?;
        let current = CurrentUser {
            id: user
                .id
                .ok_or_else(|| AppError::database("user row missing id"))?,
            name: user.name,
            email: user.email,
        };
        self.session.login(current.clone());
        tracing::info!(user = %current.name, "user logged in");
        Ok(current.identity())
    }

    /// Clear the session
    pub fn logout(&self) {
        self.session.logout();
    }

    /// Identity of the currently authenticated user, if any
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.session.current_user().map(|u| u.identity())
    }

    // ==================== Catalog ====================

    /// All books currently for sale, newest first
    pub async fn list_available_books(&self) -> AppResult<Vec<BookListing>> {
        self.books.find_available().await
    }

    /// Search available books by title or author
    pub async fn search_books(&self, query: &str) -> AppResult<Vec<BookListing>> {
        self.books.search(query).await
    }

    /// List a new book owned by the current user
    pub async fn add_book(&self, data: BookCreate) -> AppResult<Book> {
        let actor = self.session.require_user()?;
        self.books.create(actor.id, data).await
    }

    /// The current user's own listings, sold and unsold
    pub async fn my_books(&self) -> AppResult<Vec<Book>> {
        let actor = self.session.require_user()?;
        self.books.find_by_seller(&actor.id).await
    }

    /// Delete one of the current user's unsold listings
    pub async fn delete_book(&self, book_id: &BookId) -> AppResult<()> {
        let actor = self.session.require_user()?;
        self.books.delete(book_id, &actor.id).await
    }

    /// Manually flip one of the current user's listings between sold
    /// and for-sale
    pub async fn set_book_sold_status(&self, book_id: &BookId, sold: bool) -> AppResult<()> {
        let actor = self.session.require_user()?;
        self.books.set_sold_status(book_id, &actor.id, sold).await
    }

    /// Full book detail for the purchase screen
    pub async fn book_detail(&self, book_id: &BookId) -> AppResult<BookDetail> {
        self.books.find_detail(book_id).await
    }

    // ==================== Conversations ====================

    /// Open (or fetch) the conversation with a book's seller
    ///
    /// Self-contact is not rejected here; screens hide the contact
    /// action on the user's own listings.
    pub async fn contact_seller(&self, book_id: &BookId) -> AppResult<Conversation> {
        let actor = self.session.require_user()?;
        let seller = self.books.seller_of(book_id).await?;
        self.conversations
            .get_or_create(book_id.clone(), actor.id, seller)
            .await
    }

    /// The current user's conversations, newest first
    pub async fn my_conversations(&self) -> AppResult<Vec<ConversationSummary>> {
        let actor = self.session.require_user()?;
        self.conversations.conversations_for_user(&actor.id).await
    }

    /// Chat header info for one conversation
    pub async fn conversation_info(&self, id: &ConversationId) -> AppResult<ConversationInfo> {
        self.conversations.info(id).await
    }

    /// Full message history of a conversation
    ///
    /// Screens poll this on a fixed interval; each call is a complete,
    /// independent read.
    pub async fn messages(&self, id: &ConversationId) -> AppResult<Vec<MessageView>> {
        self.conversations.messages(id).await
    }

    /// Send a message in a conversation as the current user
    pub async fn send_message(&self, id: &ConversationId, text: &str) -> AppResult<Message> {
        let actor = self.session.require_user()?;
        self.conversations
            .post_message(id.clone(), actor.id, text)
            .await
    }

    // ==================== Orders ====================

    /// Purchase a book as the current user
    ///
    /// Atomically creates the pending order and marks the book sold;
    /// see [`OrderRepository::create`].
    pub async fn purchase_book(
        &self,
        book_id: &BookId,
        address: &str,
        phone: &str,
    ) -> AppResult<Order> {
        let actor = self.session.require_user()?;
        let order = self
            .orders
            .create(OrderCreate {
                book_id: book_id.clone(),
                buyer: actor.id,
                address: address.to_string(),
                phone: phone.to_string(),
            })
            .await?;
        tracing::info!(book = %book_id, "order created");
        Ok(order)
    }

    /// The current user's purchases, newest first
    pub async fn my_purchases(&self) -> AppResult<Vec<PurchaseView>> {
        let actor = self.session.require_user()?;
        self.orders.purchases(&actor.id).await
    }

    /// The current user's sales, newest first, with fulfillment contact
    pub async fn my_sales(&self) -> AppResult<Vec<SaleView>> {
        let actor = self.session.require_user()?;
        self.orders.sales(&actor.id).await
    }

    /// Set an order's status
    pub async fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> AppResult<()> {
        self.session.require_user()?;
        self.orders.update_status(id, status).await
    }

    /// Confirm a pending order (the seller's action on the orders
    /// screen)
    pub async fn confirm_order(&self, id: &OrderId) -> AppResult<()> {
        self.update_order_status(id, OrderStatus::Confirmed).await
    }
}
