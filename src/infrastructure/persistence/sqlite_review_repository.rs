//! SQLite implementation of the review repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

pub struct SqliteReviewRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteReviewRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ReviewRow {
    id: i64,
    user_id: i64,
    product_id: i64,
    rating: i64,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Review {
            id: r.id,
            user_id: r.user_id,
            product_id: r.product_id,
            // CHECK (rating BETWEEN 1 AND 5)
            rating: r.rating as i32,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (user_id, product_id, rating, comment)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, product_id, rating, comment, created_at
            "#,
        )
        .bind(new_review.user_id)
        .bind(new_review.product_id)
        .bind(new_review.rating)
        .bind(&new_review.comment)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, user_id, product_id, rating, comment, created_at
            FROM reviews
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, product_id: Option<i64>) -> Result<Vec<Review>, AppError> {
        // NULL filter matches every row
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, user_id, product_id, rating, comment, created_at
            FROM reviews
            WHERE (?1 IS NULL OR product_id = ?1)
            ORDER BY id
            "#,
        )
        .bind(product_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, patch: ReviewPatch) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            UPDATE reviews
            SET rating = COALESCE(?, rating),
                comment = COALESCE(?, comment)
            WHERE id = ?
            RETURNING id, user_id, product_id, rating, comment, created_at
            "#,
        )
        .bind(patch.rating)
        .bind(patch.comment)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("Review not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Review not found", json!({ "id": id })));
        }

        Ok(())
    }
}
