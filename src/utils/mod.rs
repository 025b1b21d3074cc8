//! Small text helpers shared by the services.
//!
//! - [`slug`] - Category slug generation
//! - [`email`] - Email normalization

pub mod email;
pub mod slug;

pub use email::normalize_email;
pub use slug::slugify;
