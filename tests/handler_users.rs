mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;

fn violation_fields(body: &Value) -> Vec<String> {
    body["error"]["details"]["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user_normalizes_email(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "  Ada Lovelace ", "email": "  Ada@Example.COM " }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body.get("createdAt").is_some());
    assert_eq!(response.header("location"), format!("/api/users/{id}").as_str());
}

#[sqlx::test]
async fn test_create_user_duplicate_email_conflict(pool: SqlitePool) {
    common::create_test_user(&pool, "Existing", "taken@example.com").await;
    let server = common::test_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Other", "email": "TAKEN@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["message"], "Email already exists");
}

#[sqlx::test]
async fn test_create_user_validation_errors(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "   ", "email": "not-an-email" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    let fields = violation_fields(&body);
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"email".to_string()));
}

#[sqlx::test]
async fn test_create_user_name_too_long(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "x".repeat(81), "email": "long@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(violation_fields(&response.json::<Value>()), vec!["name"]);
}

#[sqlx::test]
async fn test_create_user_malformed_json(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server
        .post("/api/users")
        .content_type("application/json")
        .text("{ not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "Malformed request body");
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_users_ordered_by_id(pool: SqlitePool) {
    let first = common::create_test_user(&pool, "First", "first@example.com").await;
    let second = common::create_test_user(&pool, "Second", "second@example.com").await;
    let server = common::test_server(pool);

    let response = server.get("/api/users").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"].as_i64().unwrap(), first);
    assert_eq!(items[1]["id"].as_i64().unwrap(), second);
}

#[sqlx::test]
async fn test_get_user_not_found(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server.get("/api/users/999").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["status"], 404);
    assert_eq!(body["error"]["message"], "User not found");
    assert_eq!(body["error"]["path"], "/api/users/999");
    assert!(body["error"]["timestamp"].is_string());
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_user(pool: SqlitePool) {
    let id = common::create_test_user(&pool, "Old", "old@example.com").await;
    let server = common::test_server(pool);

    let response = server
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "name": "New", "email": "New@Example.com" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "New");
    assert_eq!(body["email"], "new@example.com");
}

#[sqlx::test]
async fn test_update_user_keeps_own_email(pool: SqlitePool) {
    let id = common::create_test_user(&pool, "Same", "same@example.com").await;
    let server = common::test_server(pool);

    let response = server
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "name": "Renamed", "email": "same@example.com" }))
        .await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_update_user_email_taken_by_other(pool: SqlitePool) {
    common::create_test_user(&pool, "A", "a@example.com").await;
    let id = common::create_test_user(&pool, "B", "b@example.com").await;
    let server = common::test_server(pool);

    let response = server
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "name": "B", "email": "a@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_user(pool: SqlitePool) {
    let id = common::create_test_user(&pool, "Gone", "gone@example.com").await;
    let server = common::test_server(pool);

    server
        .delete(&format!("/api/users/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/users/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_user_with_reviews_conflict(pool: SqlitePool) {
    let user_id = common::create_test_user(&pool, "Critic", "critic@example.com").await;
    let category_id = common::create_test_category(&pool, "Books", "books").await;
    let product_id = common::create_test_product(&pool, "BK-1", 1_000, 3, category_id).await;
    sqlx::query("INSERT INTO reviews (user_id, product_id, rating) VALUES (?, ?, 4)")
        .bind(user_id)
        .bind(product_id)
        .execute(&pool)
        .await
        .unwrap();
    let server = common::test_server(pool);

    let response = server.delete(&format!("/api/users/{user_id}")).await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_delete_user_not_found(pool: SqlitePool) {
    let server = common::test_server(pool);

    server.delete("/api/users/42").await.assert_status_not_found();
}
