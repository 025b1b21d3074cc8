//! Handlers for order endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{Created, created, required};
use crate::api::dto::order::{
    CreateOrderRequest, OrderItemResponse, OrderResponse, PatchOrderRequest,
};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::application::services::OrderLine;
use crate::domain::entities::Order;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

fn order_to_response(o: Order) -> OrderResponse {
    OrderResponse {
        id: o.id,
        user_id: o.user_id,
        status: o.status.as_str().to_string(),
        total: o.total,
        items: o
            .items
            .into_iter()
            .map(|i| OrderItemResponse {
                product_id: i.product_id,
                product_name: i.product_name,
                quantity: i.quantity,
                unit_price: i.unit_price,
                line_total: i.line_total,
            })
            .collect(),
        created_at: o.created_at,
    }
}

/// Places an order.
///
/// Prices are snapshotted per line and stock is decremented atomically with
/// the order insert.
///
/// # Request Body
///
/// ```json
/// {
///   "userId": 1,
///   "items": [
///     { "productId": 3, "quantity": 2 }
///   ]
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Validation failed, bad quantity or insufficient stock", body = ErrorBody),
        (status = 404, description = "User or product not found", body = ErrorBody),
    )
)]
pub async fn create_order_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> Result<Created<OrderResponse>, AppError> {
    let user_id = required(payload.user_id, "user_id")?;

    let lines = required(payload.items, "items")?
        .into_iter()
        .map(|item| {
            Ok(OrderLine {
                product_id: required(item.product_id, "items.product_id")?,
                quantity: item.quantity,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let order = state.order_service.place_order(user_id, lines).await?;

    Ok(created(
        format!("/api/orders/{}", order.id),
        order_to_response(order),
    ))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses((status = 200, description = "All orders ordered by id", body = [OrderResponse]))
)]
pub async fn list_orders_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders.into_iter().map(order_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with items", body = OrderResponse),
        (status = 404, description = "Order not found", body = ErrorBody),
    )
)]
pub async fn get_order_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.get_order(id).await?;
    Ok(Json(order_to_response(order)))
}

/// Moves a `CREATED` order to `PAID` or `CANCELLED`.
#[utoipa::path(
    patch,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = PatchOrderRequest,
    responses(
        (status = 200, description = "Status changed", body = OrderResponse),
        (status = 400, description = "Invalid status", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 409, description = "Order already PAID or CANCELLED", body = ErrorBody),
    )
)]
pub async fn patch_order_status_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PatchOrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let status = required(payload.status, "status")?;
    let order = state.order_service.change_status(id, &status).await?;
    Ok(Json(order_to_response(order)))
}

/// Deletes an order and its items. Stock is not restored.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorBody),
    )
)]
pub async fn delete_order_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.order_service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
