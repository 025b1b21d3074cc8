//! Product entity and its write models.

use chrono::{DateTime, Utc};

use super::Money;

/// A sellable product.
///
/// `category_name` is joined in on read so responses do not need a second
/// lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub price: Money,
    pub stock: i32,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns true if `quantity` units can be taken from stock.
    pub fn has_stock_for(&self, quantity: i32) -> bool {
        self.stock >= quantity
    }
}

/// Input data for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price: Money,
    pub stock: i32,
    pub category_id: i64,
}

/// Partial update for a product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }
}
