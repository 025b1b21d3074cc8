//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Customer accounts
//! - [`CategoryRepository`] - Catalogue categories
//! - [`ProductRepository`] - Products and stock
//! - [`OrderRepository`] - Order placement and status changes
//! - [`ReviewRepository`] - Product reviews
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod category_repository;
pub mod order_repository;
pub mod product_repository;
pub mod review_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use review_repository::ReviewRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
