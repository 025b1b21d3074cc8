//! Repository trait for product reviews.

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing reviews.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteReviewRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError>;

    /// Lists reviews ordered by ID, optionally restricted to one product.
    async fn list(&self, product_id: Option<i64>) -> Result<Vec<Review>, AppError>;

    /// Applies a partial update. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
