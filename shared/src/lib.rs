//! Shared types for the Knihomat marketplace
//!
//! This crate carries everything that crosses the boundary between the
//! persistence core and its presentation surfaces:
//!
//! - **error** (`error`): unified error codes, categories and result types
//! - **view models** (`models`): typed rows returned to screens, in place
//!   of positional tuples

pub mod error;
pub mod models;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
