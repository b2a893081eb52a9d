//! Session context: the single authenticated actor
//!
//! The session is an explicit context object owned by
//! [`AppState`](crate::AppState) rather than a global mutable
//! singleton: authorization stays testable in isolation and nothing
//! reaches into ambient state. The model is a single-user client, not
//! a multi-tenant session store; at most one identity is held at a
//! time.

use crate::db::models::UserId;
use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::UserIdentity;
use std::sync::Arc;

/// Authenticated user resolved from the session
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl CurrentUser {
    /// Presentation-facing identity (string id, no credential)
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Holds at most one authenticated identity for the active client
#[derive(Clone, Default)]
pub struct SessionContext {
    current: Arc<RwLock<Option<CurrentUser>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session identity after successful authentication
    pub fn login(&self, user: CurrentUser) {
        *self.current.write() = Some(user);
    }

    /// Clear the session identity
    pub fn logout(&self) {
        *self.current.write() = None;
    }

    /// The current identity, if any
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Resolve the actor or fail with `NotAuthenticated`
    ///
    /// Every mutating operation that needs an actor goes through this,
    /// so the stores stay defensively safe even if a screen forgets
    /// its own check.
    pub fn require_user(&self) -> AppResult<CurrentUser> {
        self.current_user().ok_or_else(AppError::unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use surrealdb::RecordId;

    fn test_user() -> CurrentUser {
        CurrentUser {
            id: RecordId::from_table_key("user", "abc"),
            name: "Jana".into(),
            email: "jana@example.com".into(),
        }
    }

    #[test]
    fn starts_unauthenticated() {
        let session = SessionContext::new();
        assert!(!session.is_authenticated());
        let err = session.require_user().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn login_then_logout() {
        let session = SessionContext::new();
        session.login(test_user());
        assert!(session.is_authenticated());
        assert_eq!(session.require_user().unwrap().name, "Jana");

        session.logout();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn second_login_replaces_identity() {
        let session = SessionContext::new();
        session.login(test_user());
        session.login(CurrentUser {
            id: RecordId::from_table_key("user", "def"),
            name: "Petr".into(),
            email: "petr@example.com".into(),
        });
        assert_eq!(session.require_user().unwrap().name, "Petr");
    }

    #[test]
    fn identity_uses_string_id() {
        let identity = test_user().identity();
        assert_eq!(identity.id, "user:abc");
        assert_eq!(identity.email, "jana@example.com");
    }
}
