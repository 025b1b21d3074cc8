//! SQLite implementation of the order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Money, NewOrder, Order, OrderItem, OrderStatus};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// SQLite repository for orders.
///
/// Placement runs in a single transaction: every stock decrement is
/// conditional on `stock >= quantity`, so two concurrent orders can never
/// oversell a product. Status changes are compare-and-set on the current
/// status.
pub struct SqliteOrderRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOrderRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    status: String,
    total_cents: i64,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct OrderItemRow {
    order_id: i64,
    product_id: i64,
    product_name: String,
    quantity: i64,
    unit_price_cents: i64,
    line_total_cents: i64,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Result<Order, AppError> {
        let status = self.status.parse::<OrderStatus>().map_err(|e| {
            AppError::internal(
                "Stored order has an unknown status",
                json!({ "id": self.id, "status": e.0 }),
            )
        })?;

        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            status,
            total: Money::from_cents(self.total_cents),
            items,
            created_at: self.created_at,
        })
    }
}

impl From<OrderItemRow> for OrderItem {
    fn from(r: OrderItemRow) -> Self {
        OrderItem {
            product_id: r.product_id,
            product_name: r.product_name,
            // CHECK (quantity >= 1), written from an i32
            quantity: r.quantity as i32,
            unit_price: Money::from_cents(r.unit_price_cents),
            line_total: Money::from_cents(r.line_total_cents),
        }
    }
}

const SELECT_ITEMS: &str = r#"
    SELECT oi.order_id, oi.product_id, p.name AS product_name, oi.quantity,
           oi.unit_price_cents, oi.line_total_cents
    FROM order_items oi
    JOIN products p ON p.id = oi.product_id
"#;

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn place(&self, new_order: NewOrder) -> Result<Order, AppError> {
        // Write lock up front; concurrent placements wait on the busy timeout.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        for (product_id, quantity) in new_order.quantities() {
            let result = sqlx::query(
                "UPDATE products SET stock = stock - ? WHERE id = ? AND stock >= ?",
            )
            .bind(quantity)
            .bind(product_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                tx.rollback().await?;
                tracing::warn!(product_id, quantity, "Stock reservation failed");
                return Err(AppError::bad_request(
                    format!("Insufficient stock for product {product_id}"),
                    json!({ "product_id": product_id, "requested": quantity }),
                ));
            }
        }

        let order_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (user_id, status, total_cents)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(new_order.user_id)
        .bind(OrderStatus::Created.as_str())
        .bind(new_order.total.cents())
        .fetch_one(&mut *tx)
        .await?;

        for item in &new_order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items
                    (order_id, product_id, quantity, unit_price_cents, line_total_cents)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price.cents())
            .bind(item.line_total.cents())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            order_id,
            user_id = new_order.user_id,
            total = %new_order.total,
            items = new_order.items.len(),
            "Order placed"
        );

        self.find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::internal("Placed order vanished", json!({ "id": order_id })))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let Some(row) = sqlx::query_as::<_, OrderRow>(
            "SELECT id, user_id, status, total_cents, created_at FROM orders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemRow>(&format!(
            "{SELECT_ITEMS} WHERE oi.order_id = ? ORDER BY oi.id"
        ))
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        row.into_order(items.into_iter().map(Into::into).collect())
            .map(Some)
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, user_id, status, total_cents, created_at FROM orders ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let item_rows = sqlx::query_as::<_, OrderItemRow>(&format!(
            "{SELECT_ITEMS} ORDER BY oi.order_id, oi.id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for item in item_rows {
            items_by_order
                .entry(item.order_id)
                .or_default()
                .push(item.into());
        }

        rows.into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect()
    }

    async fn transition_status(
        &self,
        id: i64,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Order, AppError> {
        let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ? AND status = ?")
            .bind(to.as_str())
            .bind(id)
            .bind(from.as_str())
            .execute(self.pool.as_ref())
            .await?;

        let order = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(
                format!("Order status cannot be changed after it is {}", order.status),
                json!({ "id": id, "status": order.status.as_str() }),
            ));
        }

        tracing::info!(order_id = id, from = %from, to = %to, "Order status changed");

        Ok(order)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        // order_items rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Order not found", json!({ "id": id })));
        }

        Ok(())
    }
}
