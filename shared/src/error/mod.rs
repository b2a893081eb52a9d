//! Unified error system for the Knihomat marketplace
//!
//! This module provides:
//! - [`ErrorCode`]: standardized error codes for all failure types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`ErrorKind`]: classification by recovery semantics
//! - [`AppError`]: rich error type with code and message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General / validation errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission / ownership errors
//! - 4xxx: Order errors
//! - 6xxx: Book errors
//! - 7xxx: Conversation errors
//! - 8xxx: User errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::AlreadySold);
//! assert_eq!(err.kind(), ErrorKind::Conflict);
//!
//! let err = AppError::validation("price must be positive");
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! ```

mod category;
mod codes;
mod kind;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use kind::ErrorKind;
pub use types::{AppError, AppResult};
