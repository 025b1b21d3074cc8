//! OpenAPI document generated from handler annotations via utoipa.

use axum::Json;
use utoipa::OpenApi;

use crate::api::dto::{category, health, order, product, review, user};
use crate::api::handlers::{categories, orders, products, reviews, users};
use crate::error::{ErrorBody, ErrorInfo};

/// Top-level OpenAPI document served at `/v3/api-docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mini Commerce API",
        description = "Users, catalogue, orders and reviews over SQLite."
    ),
    paths(
        users::create_user_handler,
        users::list_users_handler,
        users::get_user_handler,
        users::update_user_handler,
        users::delete_user_handler,
        categories::create_category_handler,
        categories::list_categories_handler,
        categories::get_category_handler,
        categories::update_category_handler,
        categories::delete_category_handler,
        products::create_product_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::patch_product_handler,
        products::delete_product_handler,
        orders::create_order_handler,
        orders::list_orders_handler,
        orders::get_order_handler,
        orders::patch_order_status_handler,
        orders::delete_order_handler,
        reviews::create_review_handler,
        reviews::list_reviews_handler,
        reviews::get_review_handler,
        reviews::patch_review_handler,
        reviews::delete_review_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(schemas(
        ErrorBody,
        ErrorInfo,
        user::UserRequest,
        user::UserResponse,
        category::CategoryRequest,
        category::CategoryResponse,
        product::CreateProductRequest,
        product::PatchProductRequest,
        product::ProductResponse,
        order::CreateOrderRequest,
        order::CreateOrderItem,
        order::PatchOrderRequest,
        order::OrderResponse,
        order::OrderItemResponse,
        review::CreateReviewRequest,
        review::PatchReviewRequest,
        review::ReviewResponse,
        health::HealthResponse,
        health::HealthChecks,
        health::CheckStatus,
        health::ServiceStatus,
        health::ComponentStatus,
    )),
    tags(
        (name = "users", description = "Customer accounts"),
        (name = "categories", description = "Catalogue categories"),
        (name = "products", description = "Products and stock"),
        (name = "orders", description = "Order placement and status"),
        (name = "reviews", description = "Product reviews"),
        (name = "health", description = "Health checks"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
///
/// # Endpoint
///
/// `GET /v3/api-docs`
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
