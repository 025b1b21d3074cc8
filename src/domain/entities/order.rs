//! Order aggregate: the order header, its line items, and its status machine.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::{Money, Product};

/// Lifecycle of an order.
///
/// ```text
/// CREATED ──► PAID
///    │
///    └──────► CANCELLED
/// ```
///
/// `PAID` and `CANCELLED` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Created,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Created, Self::Paid, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Created)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string is not one of [`OrderStatus::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A persisted order with its items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub total: Money,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

/// A persisted order line. Prices are snapshots taken when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Money,
    pub line_total: Money,
}

/// An order that has been priced but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub items: Vec<NewOrderItem>,
    pub total: Money,
}

/// A priced line of a [`NewOrder`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl NewOrderItem {
    /// Prices `quantity` units of `product` at its current price.
    ///
    /// Returns `None` if the line total overflows.
    pub fn priced(product: &Product, quantity: i32) -> Option<Self> {
        let line_total = product.price.checked_mul(i64::from(quantity))?;
        Some(Self {
            product_id: product.id,
            quantity,
            unit_price: product.price,
            line_total,
        })
    }
}

impl NewOrder {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total: Money::ZERO,
        }
    }

    /// Appends a line and adds its total to the order total.
    ///
    /// Returns `None` (leaving the order unchanged) if the total overflows.
    pub fn add_item(&mut self, item: NewOrderItem) -> Option<()> {
        self.total = self.total.checked_add(item.line_total)?;
        self.items.push(item);
        Some(())
    }

    /// Units requested per product, summed across lines.
    pub fn quantities(&self) -> Vec<(i64, i32)> {
        let mut out: Vec<(i64, i32)> = Vec::new();
        for item in &self.items {
            match out.iter_mut().find(|(id, _)| *id == item.product_id) {
                Some((_, qty)) => *qty += item.quantity,
                None => out.push((item.product_id, item.quantity)),
            }
        }
        out
    }
}
