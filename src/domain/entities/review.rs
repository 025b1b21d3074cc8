//! Product review entity.

use chrono::{DateTime, Utc};

/// A customer's rating (1..=5) and optional comment on a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a review.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub user_id: i64,
    pub product_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Partial update for a review. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPatch {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}
