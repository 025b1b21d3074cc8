//! # Mini Commerce
//!
//! A small commerce REST API built with Axum and SQLite: users, a product
//! catalogue organised in categories, orders with stock accounting, and
//! product reviews.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business rules and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, OpenAPI document and middleware
//!
//! ## Features
//!
//! - Case-insensitive unique category names with transliterated slugs
//! - Orders priced from a snapshot of product prices
//! - Stock decremented atomically with order placement
//! - `CREATED -> PAID | CANCELLED` order lifecycle
//! - Uniform JSON error envelope with field-level validation details
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/minicommerce.db"
//!
//! # Migrations run on startup
//! cargo run
//!
//! # Seed sample data
//! cargo run --bin admin -- seed
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CategoryService, OrderLine, OrderService, ProductService, ReviewService, UserService,
    };
    pub use crate::domain::entities::{
        Category, Money, NewProduct, Order, OrderStatus, Product, Review, User,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
