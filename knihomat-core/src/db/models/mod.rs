//! Database models for the marketplace entities

pub mod serde_helpers;

mod book;
mod conversation;
mod message;
mod order;
mod user;

pub use book::{Book, BookCreate, BookId};
pub use conversation::{Conversation, ConversationId};
pub use message::{Message, MessageId};
pub use order::{Order, OrderCreate, OrderId};
pub use user::{User, UserCreate, UserId};
