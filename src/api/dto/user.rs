//! DTOs for customer accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{email_address, not_blank};

/// Request body for `POST /api/users` and `PUT /api/users/{id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 80, message = "size must be between 0 and 80")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        custom(function = "email_address"),
        length(max = 200, message = "size must be between 0 and 200")
    )]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
