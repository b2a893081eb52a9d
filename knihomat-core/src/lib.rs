//! Knihomat Core: persistence and state-transition layer for the
//! peer-to-peer used-book marketplace
//!
//! # Architecture overview
//!
//! The core owns everything with real invariants: account identity,
//! the book catalog, buyer-seller conversations and the order engine.
//! Presentation surfaces (screens, navigation, widgets) are external
//! callers that go through [`AppState`] with the intent of the current
//! user; every validated mutation runs against the embedded store and
//! returns a typed result.
//!
//! # Module structure
//!
//! ```text
//! knihomat-core/src/
//! ├── core/       # configuration and application state (the facade)
//! ├── db/         # embedded SurrealDB store, models, repositories
//! ├── session.rs  # single-session authentication context
//! └── utils/      # logging and time helpers
//! ```

pub mod core;
pub mod db;
pub mod session;
pub mod utils;

// Re-export public types
pub use crate::core::{AppState, Config};
pub use session::{CurrentUser, SessionContext};
pub use utils::logger::{init_logger, init_logger_with_file};

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCode, ErrorKind};
