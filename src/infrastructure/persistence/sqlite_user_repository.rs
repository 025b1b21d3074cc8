//! SQLite implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.name, r.email, r.created_at)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email)
            VALUES (?, ?)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| unique_email(e, &new_user.email))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, created_at FROM users ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, update: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = ?, email = ?
            WHERE id = ?
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| unique_email(e, &update.email))?;

        row.map(Into::into)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_fk_violation(&e) {
                    AppError::conflict(
                        "User has orders or reviews and cannot be deleted",
                        json!({ "id": id }),
                    )
                } else {
                    e.into()
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found", json!({ "id": id })));
        }

        Ok(())
    }
}

/// Maps a lost race on `uk_users_email` to the same error the service reports.
fn unique_email(e: sqlx::Error, email: &str) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            AppError::conflict("Email already exists", json!({ "email": email }))
        }
        _ => e.into(),
    }
}

/// True for a foreign-key failure, whichever extended code SQLite reported.
///
/// Plain `REFERENCES` yields `SQLITE_CONSTRAINT_FOREIGNKEY`; an
/// `ON DELETE RESTRICT` action yields `SQLITE_CONSTRAINT_TRIGGER` with the
/// same message, which sqlx does not classify as a foreign-key violation.
pub(crate) fn is_fk_violation(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|db| {
        db.is_foreign_key_violation() || db.message().contains("FOREIGN KEY constraint failed")
    })
}
