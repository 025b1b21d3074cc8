//! DTOs for catalogue categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::not_blank;

/// Request body for `POST /api/categories` and `PUT /api/categories/{id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 80, message = "size must be between 0 and 80")
    )]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier derived from the name.
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
