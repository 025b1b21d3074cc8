//! Repository trait for orders.

use crate::domain::entities::{NewOrder, Order, OrderStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for placing and managing orders.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteOrderRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_order.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a priced order and takes its quantities out of product stock.
    ///
    /// Runs in a single transaction: either every stock decrement and the
    /// order itself are written, or nothing is. A decrement only applies
    /// while enough stock remains, so concurrent orders cannot oversell.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a product no longer has enough stock.
    /// Returns [`AppError::Internal`] on database errors.
    async fn place(&self, new_order: NewOrder) -> Result<Order, AppError>;

    /// Finds an order (with items) by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Lists all orders (with items) ordered by ID.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    /// Moves an order from `from` to `to`.
    ///
    /// The write only happens while the stored status still equals `from`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Conflict`] if the status changed concurrently.
    async fn transition_status(
        &self,
        id: i64,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Order, AppError>;

    /// Deletes an order and its items. Stock is not restored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
