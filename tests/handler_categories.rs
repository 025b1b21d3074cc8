mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_create_category_generates_slug(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "  Çay ve Kahve " }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["name"], "Çay ve Kahve");
    assert_eq!(body["slug"], "cay-ve-kahve");
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        response.header("location"),
        format!("/api/categories/{id}").as_str()
    );
}

#[sqlx::test]
async fn test_create_category_duplicate_name_ignores_case(pool: SqlitePool) {
    common::create_test_category(&pool, "Electronics", "electronics").await;
    let server = common::test_server(pool);

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "ELECTRONICS" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Category already exists"
    );
}

#[sqlx::test]
async fn test_create_category_duplicate_slug(pool: SqlitePool) {
    common::create_test_category(&pool, "Home Garden", "home-garden").await;
    let server = common::test_server(pool);

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "Home & Garden" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_create_category_blank_name(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["details"]["violations"][0]["field"], "name");
    assert_eq!(
        body["error"]["details"]["violations"][0]["message"],
        "must not be blank"
    );
}

#[sqlx::test]
async fn test_update_category_recomputes_slug(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Books", "books").await;
    let server = common::test_server(pool);

    let response = server
        .put(&format!("/api/categories/{id}"))
        .json(&json!({ "name": "Used Books" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Used Books");
    assert_eq!(body["slug"], "used-books");
}

#[sqlx::test]
async fn test_update_category_same_name_allowed(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Books", "books").await;
    let server = common::test_server(pool);

    server
        .put(&format!("/api/categories/{id}"))
        .json(&json!({ "name": "books" }))
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_get_category_not_found(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server.get("/api/categories/7").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Category not found"
    );
}

#[sqlx::test]
async fn test_delete_category_with_products_conflict(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Toys", "toys").await;
    common::create_test_product(&pool, "TOY-1", 500, 1, id).await;
    let server = common::test_server(pool);

    let response = server.delete(&format!("/api/categories/{id}")).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Category has products; delete or move products first"
    );
}

#[sqlx::test]
async fn test_delete_empty_category(pool: SqlitePool) {
    let id = common::create_test_category(&pool, "Empty", "empty").await;
    let server = common::test_server(pool.clone());

    server
        .delete(&format!("/api/categories/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(common::count_rows(&pool, "categories").await, 0);
}
