//! DTOs for orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::Money;

/// Request body for `POST /api/orders`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(required(message = "must not be null"))]
    pub user_id: Option<i64>,

    #[validate(
        required(message = "must not be null"),
        length(min = 1, message = "size must be between 1 and 2147483647"),
        nested
    )]
    pub items: Option<Vec<CreateOrderItem>>,
}

/// One requested line. Quantity is checked by the order service.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    #[validate(required(message = "must not be null"))]
    pub product_id: Option<i64>,

    #[serde(default)]
    pub quantity: i32,
}

/// Request body for `PATCH /api/orders/{id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchOrderRequest {
    /// `CREATED`, `PAID` or `CANCELLED`, case-insensitive.
    #[validate(required(message = "must not be null"))]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub unit_price: Money,
    #[schema(value_type = f64)]
    pub line_total: Money,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    #[schema(example = "CREATED")]
    pub status: String,
    #[schema(value_type = f64)]
    pub total: Money,
    pub items: Vec<OrderItemResponse>,
    pub created_at: DateTime<Utc>,
}
