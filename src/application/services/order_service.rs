//! Order placement and lifecycle service.

use crate::domain::entities::{NewOrder, NewOrderItem, Order, OrderStatus, Product};
use crate::domain::repositories::{OrderRepository, ProductRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// One requested line of an order: a product and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: i32,
}

/// Service for placing orders and moving them through their status machine.
///
/// # Placement
///
/// Lines are checked in request order. Each line snapshots the product's
/// current price; repeated products draw from the same remaining stock.
/// The repository then applies the stock decrements and inserts the order
/// atomically, re-checking stock so concurrent orders cannot oversell.
///
/// # Status machine
///
/// `CREATED` may move to `PAID` or `CANCELLED`; both are terminal.
pub struct OrderService<O: OrderRepository, U: UserRepository, P: ProductRepository> {
    repository: Arc<O>,
    user_repository: Arc<U>,
    product_repository: Arc<P>,
}

impl<O, U, P> OrderService<O, U, P>
where
    O: OrderRepository,
    U: UserRepository,
    P: ProductRepository,
{
    pub fn new(repository: Arc<O>, user_repository: Arc<U>, product_repository: Arc<P>) -> Self {
        Self {
            repository,
            user_repository,
            product_repository,
        }
    }

    /// Prices and places an order for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or any product does not exist.
    /// Returns [`AppError::Validation`] if the order is empty, a quantity is
    /// below 1, or stock is insufficient.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn place_order(&self, user_id: i64, lines: Vec<OrderLine>) -> Result<Order, AppError> {
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found("User not found", json!({"user_id": user_id})));
        }

        if lines.is_empty() {
            return Err(AppError::bad_request(
                "Order must contain at least one item",
                json!({"field": "items"}),
            ));
        }

        let mut products: HashMap<i64, Product> = HashMap::new();
        let mut remaining: HashMap<i64, i32> = HashMap::new();
        let mut order = NewOrder::new(user_id);

        for line in lines {
            if !products.contains_key(&line.product_id) {
                let product = self
                    .product_repository
                    .find_by_id(line.product_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::not_found(
                            format!("Product not found: {}", line.product_id),
                            json!({"product_id": line.product_id}),
                        )
                    })?;
                products.insert(line.product_id, product);
            }
            let product = &products[&line.product_id];

            if line.quantity <= 0 {
                return Err(AppError::bad_request(
                    "Quantity must be >= 1",
                    json!({"product_id": line.product_id, "quantity": line.quantity}),
                ));
            }

            let left = remaining.entry(product.id).or_insert(product.stock);
            if *left < line.quantity {
                return Err(AppError::bad_request(
                    format!("Insufficient stock for product {}", product.id),
                    json!({"product_id": product.id, "available": *left, "requested": line.quantity}),
                ));
            }
            *left -= line.quantity;

            let item = NewOrderItem::priced(product, line.quantity)
                .ok_or_else(|| Self::amount_overflow(product.id))?;
            order
                .add_item(item)
                .ok_or_else(|| Self::amount_overflow(product.id))?;
        }

        self.repository.place(order).await
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    pub async fn get_order(&self, id: i64) -> Result<Order, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({"id": id})))
    }

    /// Moves a `CREATED` order to `PAID` or `CANCELLED`.
    ///
    /// `status` is matched case-insensitively after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Validation`] for an unknown status or a `CREATED` target.
    /// Returns [`AppError::Conflict`] if the order is already `PAID` or `CANCELLED`.
    pub async fn change_status(&self, id: i64, status: &str) -> Result<Order, AppError> {
        let order = self.get_order(id).await?;

        let target: OrderStatus = status.parse().map_err(|_| {
            AppError::bad_request(
                "Invalid status. Allowed: CREATED, PAID, CANCELLED",
                json!({"status": status}),
            )
        })?;

        if order.status.is_terminal() {
            return Err(AppError::conflict(
                format!("Order status cannot be changed after it is {}", order.status),
                json!({"id": id, "status": order.status.as_str()}),
            ));
        }

        if target == OrderStatus::Created {
            return Err(AppError::bad_request(
                "Order is already CREATED",
                json!({"id": id}),
            ));
        }

        self.repository
            .transition_status(id, OrderStatus::Created, target)
            .await
    }

    /// Deletes an order and its items. Stock is not restored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    pub async fn delete_order(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    fn amount_overflow(product_id: i64) -> AppError {
        AppError::bad_request(
            "Order total is out of range",
            json!({"product_id": product_id}),
        )
    }
}
