//! Repository trait for customer accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user. `email` must already be normalized.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Returns true if any user has exactly this (normalized) email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError>;

    /// Lists all users ordered by ID.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces name and email of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the email is already taken.
    async fn update(&self, id: i64, update: NewUser) -> Result<User, AppError>;

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if orders or reviews still reference the user.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
