//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Customer registration and updates
//! - [`services::category_service::CategoryService`] - Catalogue categories and slugs
//! - [`services::product_service::ProductService`] - Products, SKUs and stock
//! - [`services::order_service::OrderService`] - Order placement and status machine
//! - [`services::review_service::ReviewService`] - Product reviews

pub mod services;
