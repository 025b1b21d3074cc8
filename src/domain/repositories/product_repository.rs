//! Repository trait for products.

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing products.
///
/// Returned [`Product`] values always carry the owning category's name.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteProductRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_product.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the SKU is already taken or the
    /// category does not exist.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists products ordered by ID, optionally restricted to one category.
    async fn list(&self, category_id: Option<i64>) -> Result<Vec<Product>, AppError>;

    /// Returns true if a product with this exact SKU exists.
    async fn exists_by_sku(&self, sku: &str) -> Result<bool, AppError>;

    /// Returns true if at least one product belongs to the category.
    async fn exists_by_category_id(&self, category_id: i64) -> Result<bool, AppError>;

    /// Applies a partial update. `None` fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError>;

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Conflict`] if order items or reviews reference it.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
