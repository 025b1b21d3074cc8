//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Entities are mapped to
//! response DTOs here; services never see DTO types.

pub mod categories;
pub mod health;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;

use axum::{
    Json,
    http::{StatusCode, header},
};

pub use categories::{
    create_category_handler, delete_category_handler, get_category_handler,
    list_categories_handler, update_category_handler,
};
pub use health::health_handler;
pub use orders::{
    create_order_handler, delete_order_handler, get_order_handler, list_orders_handler,
    patch_order_status_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    patch_product_handler,
};
pub use reviews::{
    create_review_handler, delete_review_handler, get_review_handler, list_reviews_handler,
    patch_review_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};

/// `201 Created` with a `Location` header pointing at the new resource.
pub type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

fn created<T>(location: String, body: T) -> Created<T> {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
}

/// Unwraps a field that `#[validate(required)]` has already checked.
fn required<T>(value: Option<T>, field: &'static str) -> Result<T, crate::error::AppError> {
    value.ok_or_else(|| {
        crate::error::AppError::bad_request(
            "Validation failed",
            serde_json::json!({ "violations": [{ "field": field, "message": "must not be null" }] }),
        )
    })
}
