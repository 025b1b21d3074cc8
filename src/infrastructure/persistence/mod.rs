//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row types.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`] - Customer accounts
//! - [`SqliteCategoryRepository`] - Catalogue categories
//! - [`SqliteProductRepository`] - Products joined with their category
//! - [`SqliteOrderRepository`] - Transactional order placement
//! - [`SqliteReviewRepository`] - Product reviews

pub mod sqlite_category_repository;
pub mod sqlite_order_repository;
pub mod sqlite_product_repository;
pub mod sqlite_review_repository;
pub mod sqlite_user_repository;

pub use sqlite_category_repository::SqliteCategoryRepository;
pub use sqlite_order_repository::SqliteOrderRepository;
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_review_repository::SqliteReviewRepository;
pub use sqlite_user_repository::SqliteUserRepository;
