mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;

struct Fixture {
    user_id: i64,
    laptop_id: i64,
    mouse_id: i64,
}

async fn seed(pool: &SqlitePool) -> Fixture {
    let user_id = common::create_test_user(pool, "Buyer", "buyer@example.com").await;
    let category_id = common::create_test_category(pool, "Electronics", "electronics").await;
    let laptop_id = common::create_test_product(pool, "LAP-001", 100_000, 5, category_id).await;
    let mouse_id = common::create_test_product(pool, "MOU-001", 1_550, 2, category_id).await;
    Fixture {
        user_id,
        laptop_id,
        mouse_id,
    }
}

async fn place(server: &axum_test::TestServer, body: Value) -> axum_test::TestResponse {
    server.post("/api/orders").json(&body).await
}

// ─── PLACE ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_place_order_prices_and_decrements_stock(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool.clone());

    let response = place(
        &server,
        json!({
            "userId": f.user_id,
            "items": [
                { "productId": f.laptop_id, "quantity": 2 },
                { "productId": f.mouse_id, "quantity": 1 }
            ]
        }),
    )
    .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(response.header("location"), format!("/api/orders/{id}").as_str());
    assert_eq!(body["status"], "CREATED");
    assert_eq!(body["userId"].as_i64().unwrap(), f.user_id);
    assert_eq!(body["total"].as_f64().unwrap(), 2015.5);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["productName"], "Product LAP-001");
    assert_eq!(items[0]["unitPrice"].as_f64().unwrap(), 1000.0);
    assert_eq!(items[0]["lineTotal"].as_f64().unwrap(), 2000.0);
    assert_eq!(items[1]["quantity"], 1);

    assert_eq!(common::product_stock(&pool, f.laptop_id).await, 3);
    assert_eq!(common::product_stock(&pool, f.mouse_id).await, 1);
}

#[sqlx::test]
async fn test_place_order_snapshots_price(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);

    let order = place(
        &server,
        json!({ "userId": f.user_id, "items": [{ "productId": f.mouse_id, "quantity": 1 }] }),
    )
    .await
    .json::<Value>();

    server
        .patch(&format!("/api/products/{}", f.mouse_id))
        .json(&json!({ "price": 99.99 }))
        .await
        .assert_status_ok();

    let reloaded = server
        .get(&format!("/api/orders/{}", order["id"]))
        .await
        .json::<Value>();
    assert_eq!(reloaded["items"][0]["unitPrice"].as_f64().unwrap(), 15.5);
    assert_eq!(reloaded["total"].as_f64().unwrap(), 15.5);
}

#[sqlx::test]
async fn test_place_order_insufficient_stock_leaves_stock_untouched(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool.clone());

    let response = place(
        &server,
        json!({
            "userId": f.user_id,
            "items": [
                { "productId": f.laptop_id, "quantity": 1 },
                { "productId": f.mouse_id, "quantity": 3 }
            ]
        }),
    )
    .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        format!("Insufficient stock for product {}", f.mouse_id)
    );
    assert_eq!(common::product_stock(&pool, f.laptop_id).await, 5);
    assert_eq!(common::product_stock(&pool, f.mouse_id).await, 2);
    assert_eq!(common::count_rows(&pool, "orders").await, 0);
}

#[sqlx::test]
async fn test_place_order_repeated_product_shares_stock(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool.clone());

    let response = place(
        &server,
        json!({
            "userId": f.user_id,
            "items": [
                { "productId": f.mouse_id, "quantity": 2 },
                { "productId": f.mouse_id, "quantity": 1 }
            ]
        }),
    )
    .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(common::product_stock(&pool, f.mouse_id).await, 2);
}

#[sqlx::test]
async fn test_place_order_unknown_user(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);

    let response = place(
        &server,
        json!({ "userId": 999, "items": [{ "productId": f.mouse_id, "quantity": 1 }] }),
    )
    .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["message"], "User not found");
}

#[sqlx::test]
async fn test_place_order_unknown_product(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);

    let response = place(
        &server,
        json!({ "userId": f.user_id, "items": [{ "productId": 777, "quantity": 1 }] }),
    )
    .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Product not found: 777"
    );
}

#[sqlx::test]
async fn test_place_order_zero_quantity(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);

    let response = place(
        &server,
        json!({ "userId": f.user_id, "items": [{ "productId": f.mouse_id, "quantity": 0 }] }),
    )
    .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Quantity must be >= 1"
    );
}

#[sqlx::test]
async fn test_place_order_validation(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);

    let empty = place(&server, json!({ "userId": f.user_id, "items": [] })).await;
    empty.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        empty.json::<Value>()["error"]["details"]["violations"][0]["field"],
        "items"
    );

    let missing_product = place(
        &server,
        json!({ "userId": f.user_id, "items": [{ "quantity": 1 }] }),
    )
    .await;
    missing_product.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        missing_product.json::<Value>()["error"]["details"]["violations"][0]["field"],
        "items[0].product_id"
    );

    let missing_user = place(
        &server,
        json!({ "items": [{ "productId": f.mouse_id, "quantity": 1 }] }),
    )
    .await;
    missing_user.assert_status(StatusCode::BAD_REQUEST);
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_orders_includes_items(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);

    for product_id in [f.laptop_id, f.mouse_id] {
        place(
            &server,
            json!({ "userId": f.user_id, "items": [{ "productId": product_id, "quantity": 1 }] }),
        )
        .await
        .assert_status(StatusCode::CREATED);
    }

    let orders = server.get("/api/orders").await.json::<Vec<Value>>();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["items"][0]["productId"].as_i64().unwrap(), f.laptop_id);
    assert_eq!(orders[1]["items"][0]["productId"].as_i64().unwrap(), f.mouse_id);
}

#[sqlx::test]
async fn test_get_order_not_found(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server.get("/api/orders/1").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["message"], "Order not found");
}

#[sqlx::test]
async fn test_get_order_non_numeric_id(pool: SqlitePool) {
    let server = common::test_server(pool);

    let response = server.get("/api/orders/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["status"], 400);
    assert_eq!(body["error"]["message"], "Invalid path parameter");
    assert!(body["error"]["details"]["reason"].is_string());
}

// ─── STATUS ──────────────────────────────────────────────────────────────────

async fn placed_order(server: &axum_test::TestServer, f: &Fixture) -> i64 {
    place(
        server,
        json!({ "userId": f.user_id, "items": [{ "productId": f.laptop_id, "quantity": 1 }] }),
    )
    .await
    .json::<Value>()["id"]
        .as_i64()
        .unwrap()
}

#[sqlx::test]
async fn test_pay_order(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);
    let id = placed_order(&server, &f).await;

    let response = server
        .patch(&format!("/api/orders/{id}"))
        .json(&json!({ "status": " paid " }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "PAID");
}

#[sqlx::test]
async fn test_terminal_status_cannot_change(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);
    let id = placed_order(&server, &f).await;

    server
        .patch(&format!("/api/orders/{id}"))
        .json(&json!({ "status": "CANCELLED" }))
        .await
        .assert_status_ok();

    let response = server
        .patch(&format!("/api/orders/{id}"))
        .json(&json!({ "status": "PAID" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Order status cannot be changed after it is CANCELLED"
    );
}

#[sqlx::test]
async fn test_invalid_status(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);
    let id = placed_order(&server, &f).await;

    let response = server
        .patch(&format!("/api/orders/{id}"))
        .json(&json!({ "status": "SHIPPED" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Invalid status. Allowed: CREATED, PAID, CANCELLED"
    );
}

#[sqlx::test]
async fn test_status_already_created(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);
    let id = placed_order(&server, &f).await;

    let response = server
        .patch(&format!("/api/orders/{id}"))
        .json(&json!({ "status": "created" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Order is already CREATED"
    );
}

#[sqlx::test]
async fn test_status_missing_order(pool: SqlitePool) {
    let server = common::test_server(pool);

    server
        .patch("/api/orders/55")
        .json(&json!({ "status": "PAID" }))
        .await
        .assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_order_removes_items_keeps_stock(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool.clone());
    let id = placed_order(&server, &f).await;

    server
        .delete(&format!("/api/orders/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(common::count_rows(&pool, "order_items").await, 0);
    assert_eq!(common::product_stock(&pool, f.laptop_id).await, 4);
}

#[sqlx::test]
async fn test_delete_product_in_order_conflict(pool: SqlitePool) {
    let f = seed(&pool).await;
    let server = common::test_server(pool);
    placed_order(&server, &f).await;

    server
        .delete(&format!("/api/products/{}", f.laptop_id))
        .await
        .assert_status(StatusCode::CONFLICT);
}
