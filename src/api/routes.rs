//! API route configuration.

use crate::api::handlers::{
    create_category_handler, create_order_handler, create_product_handler, create_review_handler,
    create_user_handler, delete_category_handler, delete_order_handler, delete_product_handler,
    delete_review_handler, delete_user_handler, get_category_handler, get_order_handler,
    get_product_handler, get_review_handler, get_user_handler, list_categories_handler,
    list_orders_handler, list_products_handler, list_reviews_handler, list_users_handler,
    patch_order_status_handler, patch_product_handler, patch_review_handler,
    update_category_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All REST routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET|POST          /users`, `GET|PUT|DELETE   /users/{id}`
/// - `GET|POST          /categories`, `GET|PUT|DELETE /categories/{id}`
/// - `GET|POST          /products`, `GET|PATCH|DELETE /products/{id}`
/// - `GET|POST          /orders`, `GET|PATCH|DELETE   /orders/{id}`
/// - `GET|POST          /reviews`, `GET|PATCH|DELETE  /reviews/{id}`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/{id}",
            get(get_product_handler)
                .patch(patch_product_handler)
                .delete(delete_product_handler),
        )
        .route("/orders", get(list_orders_handler).post(create_order_handler))
        .route(
            "/orders/{id}",
            get(get_order_handler)
                .patch(patch_order_status_handler)
                .delete(delete_order_handler),
        )
        .route(
            "/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route(
            "/reviews/{id}",
            get(get_review_handler)
                .patch(patch_review_handler)
                .delete(delete_review_handler),
        )
}
