//! SQLite implementation of the category repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::sqlite_user_repository::is_fk_violation;
use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// SQLite repository for catalogue categories.
///
/// Name and slug are both unique; products hold a restricting foreign key,
/// so a category with products cannot be removed.
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category::new(r.id, r.name, r.slug, r.created_at)
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES (?, ?)
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(&new_category.name)
        .bind(&new_category.slug)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| duplicate(e, &new_category))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Category>, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, slug, created_at
            FROM categories
            WHERE name = ? COLLATE NOCASE
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at FROM categories ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, update: NewCategory) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name = ?, slug = ?
            WHERE id = ?
            RETURNING id, name, slug, created_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.slug)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| duplicate(e, &update))?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Category not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_fk_violation(&e) {
                    AppError::conflict(
                        "Category has products; delete or move products first",
                        json!({ "id": id }),
                    )
                } else {
                    e.into()
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Category not found", json!({ "id": id })));
        }

        Ok(())
    }
}

fn duplicate(e: sqlx::Error, category: &NewCategory) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => AppError::conflict(
            "Category already exists",
            json!({ "name": category.name, "slug": category.slug }),
        ),
        _ => e.into(),
    }
}
