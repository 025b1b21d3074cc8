//! DTOs for products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::validation::{not_blank, positive_money};
use crate::domain::entities::Money;

/// Request body for `POST /api/products`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 120, message = "size must be between 0 and 120")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 40, message = "size must be between 0 and 40")
    )]
    pub sku: String,

    /// Unit price with at most two decimal places.
    #[schema(value_type = f64, example = 89.9)]
    #[validate(required(message = "must not be null"), custom(function = "positive_money"))]
    pub price: Option<Money>,

    /// Units in stock; defaults to 0.
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub stock: Option<i32>,

    #[validate(required(message = "must not be null"))]
    pub category_id: Option<i64>,
}

/// Request body for `PATCH /api/products/{id}`. Absent or null fields are unchanged.
///
/// A present `name` or `sku` must not be blank, the same as on create.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchProductRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 120, message = "size must be between 0 and 120")
    )]
    pub name: Option<String>,

    #[validate(
        custom(function = "not_blank"),
        length(max = 40, message = "size must be between 0 and 40")
    )]
    pub sku: Option<String>,

    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "positive_money"))]
    pub price: Option<Money>,

    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub stock: Option<i32>,

    pub category_id: Option<i64>,
}

/// Query string for `GET /api/products`.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// Only products in this category.
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub category_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[schema(value_type = f64)]
    pub price: Money,
    pub stock: i32,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
}
