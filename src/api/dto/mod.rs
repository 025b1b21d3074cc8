//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization (camelCase on
//! the wire), validator for input validation and utoipa for the OpenAPI
//! schema.

pub mod category;
pub mod health;
pub mod order;
pub mod product;
pub mod review;
pub mod user;
pub mod validation;
