//! User Repository

use super::{BaseRepository, db_error};
use crate::db::models::{User, UserCreate, UserId};
use crate::utils::time;
use shared::error::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Register a new account with a hashed credential
    pub async fn register(&self, data: UserCreate) -> AppResult<User> {
        let name = data.name.trim();
        let email = data.email.trim();
        if name.is_empty() || email.is_empty() || data.password.is_empty() {
            return Err(AppError::new(ErrorCode::MissingField));
        }
        if self.find_by_email(email).await?.is_some() {
            return Err(AppError::new(ErrorCode::DuplicateEmail));
        }

        let password_hash = User::hash_password(&data.password)
            .map_err(|e| AppError::database(format!("Failed to hash password: {e}")))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    name = $name,
                    email = $email,
                    password_hash = $password_hash,
                    created_at = $now
                RETURN AFTER"#,
            )
            .bind(("name", name.to_string()))
            .bind(("email", email.to_string()))
            .bind(("password_hash", password_hash))
            .bind(("now", time::now_millis()))
            .await
            .map_err(db_error)?;

        // the unique email index is the backstop for concurrent registrations
        let created: Vec<User> = result.take(0).map_err(|e| {
            if e.to_string().contains("user_email") {
                AppError::new(ErrorCode::DuplicateEmail)
            } else {
                db_error(e)
            }
        })?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| AppError::database("user row not returned"))
    }

    /// Verify credentials
    ///
    /// Unknown email and wrong password collapse into the same
    /// `InvalidCredentials` error to avoid account enumeration.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;
        let verified = user
            .verify_password(password)
            .map_err(|e| AppError::database(format!("Password verification failed: {e}")))?;
        if !verified {
            return Err(AppError::invalid_credentials());
        }
        Ok(user)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.trim().to_string()))
            .await
            .map_err(db_error)?;
        let users: Vec<User> = result.take(0).map_err(db_error)?;
        Ok(users.into_iter().next())
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        self.base.db().select(id.clone()).await.map_err(db_error)
    }
}
