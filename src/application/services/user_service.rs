//! Customer account service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::normalize_email;
use serde_json::json;
use std::sync::Arc;

/// Service for registering and maintaining customer accounts.
///
/// Emails are compared and stored in normalized form, so `Ali@Example.com`
/// and ` ali@example.com ` are the same account.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the normalized email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, name: String, email: String) -> Result<User, AppError> {
        let new_user = NewUser {
            name: name.trim().to_string(),
            email: normalize_email(&email),
        };

        if self.repository.exists_by_email(&new_user.email).await? {
            return Err(AppError::conflict(
                "Email already exists",
                json!({"email": new_user.email}),
            ));
        }

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }

    /// Replaces a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the new email belongs to someone else.
    pub async fn update_user(&self, id: i64, name: String, email: String) -> Result<User, AppError> {
        let existing = self.get_user(id).await?;

        let update = NewUser {
            name: name.trim().to_string(),
            email: normalize_email(&email),
        };

        if update.email != existing.email && self.repository.exists_by_email(&update.email).await? {
            return Err(AppError::conflict(
                "Email already exists",
                json!({"email": update.email}),
            ));
        }

        self.repository.update(id, update).await
    }

    /// Deletes a user that has no orders or reviews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if orders or reviews still reference it.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
