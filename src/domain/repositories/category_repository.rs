//! Repository trait for catalogue categories.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCategoryRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name or slug is already taken.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds a category by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Finds a category by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError>;

    /// Finds a category whose name matches case-insensitively.
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Category>, AppError>;

    /// Lists all categories ordered by ID.
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    /// Renames a category (name and slug).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    async fn update(&self, id: i64, update: NewCategory) -> Result<Category, AppError>;

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
