#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use mini_commerce::api::handlers::health_handler;
use mini_commerce::api::middleware::error_path::attach_error_path;
use mini_commerce::api::openapi::openapi_handler;
use mini_commerce::api::routes::api_routes;
use mini_commerce::state::AppState;
use sqlx::SqlitePool;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool)
}

/// Full route table without the trace and path-normalization layers.
pub fn test_server(pool: SqlitePool) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v3/api-docs", get(openapi_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state(pool))
        .layer(middleware::from_fn(attach_error_path));
    TestServer::new(app).unwrap()
}

pub async fn create_test_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_category(pool: &SqlitePool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, slug) VALUES (?, ?) RETURNING id")
        .bind(name)
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_product(
    pool: &SqlitePool,
    sku: &str,
    price_cents: i64,
    stock: i32,
    category_id: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products (name, sku, price_cents, stock, category_id) VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(format!("Product {sku}"))
    .bind(sku)
    .bind(price_cents)
    .bind(stock)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn product_stock(pool: &SqlitePool, product_id: i64) -> i64 {
    sqlx::query_scalar("SELECT stock FROM products WHERE id = ?")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
