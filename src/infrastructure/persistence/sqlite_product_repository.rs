//! SQLite implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::sqlite_user_repository::is_fk_violation;
use crate::domain::entities::{Money, NewProduct, Product, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// SQLite repository for products.
///
/// Reads join `categories` so every [`Product`] carries its category name.
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Product::try_from).transpose()
    }
}

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.sku, p.price_cents, p.stock, p.category_id,
           c.name AS category_name, p.created_at
    FROM products p
    JOIN categories c ON c.id = p.category_id
"#;

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    sku: String,
    price_cents: i64,
    stock: i64,
    category_id: i64,
    category_name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(r: ProductRow) -> Result<Self, Self::Error> {
        let stock = i32::try_from(r.stock).map_err(|_| {
            AppError::internal("Stored stock is out of range", json!({ "id": r.id }))
        })?;

        Ok(Product {
            id: r.id,
            name: r.name,
            sku: r.sku,
            price: Money::from_cents(r.price_cents),
            stock,
            category_id: r.category_id,
            category_name: r.category_name,
            created_at: r.created_at,
        })
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, sku, price_cents, stock, category_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&new_product.name)
        .bind(&new_product.sku)
        .bind(new_product.price.cents())
        .bind(new_product.stock)
        .bind(new_product.category_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| write_error(e, new_product.category_id, &new_product.sku))?;

        self.fetch(id)
            .await?
            .ok_or_else(|| AppError::internal("Created product vanished", json!({ "id": id })))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        self.fetch(id).await
    }

    async fn list(&self, category_id: Option<i64>) -> Result<Vec<Product>, AppError> {
        let rows = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "{SELECT_PRODUCT} WHERE p.category_id = ? ORDER BY p.id"
                ))
                .bind(category_id)
                .fetch_all(self.pool.as_ref())
                .await?
            }
            None => {
                sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} ORDER BY p.id"))
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
        };

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn exists_by_sku(&self, sku: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE sku = ?")
            .bind(sku)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_category_id(&self, category_id: i64) -> Result<bool, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = ?")
                .bind(category_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count > 0)
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        let sku = patch.sku.clone().unwrap_or_default();
        let category_id = patch.category_id.unwrap_or_default();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = COALESCE(?, name),
                sku = COALESCE(?, sku),
                price_cents = COALESCE(?, price_cents),
                stock = COALESCE(?, stock),
                category_id = COALESCE(?, category_id)
            WHERE id = ?
            "#,
        )
        .bind(patch.name)
        .bind(patch.sku)
        .bind(patch.price.map(Money::cents))
        .bind(patch.stock)
        .bind(patch.category_id)
        .bind(id)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| write_error(e, category_id, &sku))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found", json!({ "id": id })));
        }

        self.fetch(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_fk_violation(&e) {
                    AppError::conflict(
                        "Product is referenced by orders or reviews",
                        json!({ "id": id }),
                    )
                } else {
                    e.into()
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found", json!({ "id": id })));
        }

        Ok(())
    }
}

/// Translates constraint failures on insert/update into the service's messages.
fn write_error(e: sqlx::Error, category_id: i64, sku: &str) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            AppError::conflict("SKU already exists", json!({ "sku": sku }))
        }
        Some(_) if is_fk_violation(&e) => AppError::not_found(
            "Category not found",
            json!({ "category_id": category_id }),
        ),
        _ => e.into(),
    }
}
