//! Commerce model: entities and the storage contracts services depend on.
//!
//! - [`entities`] - Users, catalogue, orders, reviews and [`entities::Money`]
//! - [`repositories`] - Async persistence traits, implemented over SQLite in
//!   [`crate::infrastructure::persistence`]
//!
//! Nothing here knows about HTTP or SQL. Rules that need storage lookups
//! (uniqueness, stock) live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
