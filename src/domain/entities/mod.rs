//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; business rules live in the services
//! (see [`crate::application::services`]).
//!
//! # Entity Types
//!
//! - [`User`] - A customer account
//! - [`Category`] - A catalogue category with a URL slug
//! - [`Product`] - A sellable item with price and stock
//! - [`Order`] - A placed order with priced line items
//! - [`Review`] - A customer rating of a product
//! - [`Money`] - Fixed-point amount used for prices and totals
//!
//! # Design Pattern
//!
//! Entities come with separate write models:
//! - `NewUser`, `NewCategory`, `NewProduct`, `NewOrder`, `NewReview` - For creating records
//! - `ProductPatch`, `ReviewPatch` - For partial updates

pub mod category;
pub mod money;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use category::{Category, NewCategory};
pub use money::{Money, MoneyParseError};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus, UnknownStatus};
pub use product::{NewProduct, Product, ProductPatch};
pub use review::{NewReview, Review, ReviewPatch};
pub use user::{NewUser, User};
