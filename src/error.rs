//! Application error type and its HTTP representation.
//!
//! Every fallible layer (repositories, services, extractors) returns
//! [`AppError`]. Handlers propagate it with `?` and axum renders it through
//! the [`IntoResponse`] impl below.
//!
//! # Response body
//!
//! ```json
//! {
//!   "error": {
//!     "code": "not_found",
//!     "status": 404,
//!     "message": "Product not found",
//!     "details": { "id": 42 },
//!     "path": "/api/products/42",
//!     "timestamp": "2025-01-01T12:00:00Z"
//!   }
//! }
//! ```
//!
//! `path` is filled in by [`attach_error_path`](crate::api::middleware::error_path::attach_error_path).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Machine-readable error description.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorInfo {
    /// One of `validation_error`, `not_found`, `conflict`, `internal_error`.
    pub code: &'static str,
    pub status: u16,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
    /// Request path, absent when rendered outside the router.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable description.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            status: self.status_code().as_u16(),
            message: message.clone(),
            details: details.clone(),
            path: None,
            timestamp: Utc::now(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, details = ?self.to_error_info().details, "Request failed");
        }

        let info = self.to_error_info();
        let mut response = (status, Json(ErrorBody { error: info.clone() })).into_response();
        response.extensions_mut().insert(info);
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() {
                return AppError::conflict(
                    "Resource is still referenced by other records",
                    json!({ "reason": db.message() }),
                );
            }
            if db.is_check_violation() {
                return AppError::bad_request(
                    "Value violates a storage constraint",
                    json!({ "reason": db.message() }),
                );
            }
        }

        tracing::error!(error = ?e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let violations = collect_violations(&errors);
        AppError::bad_request("Validation failed", json!({ "violations": violations }))
    }
}

/// Flattens nested validator output into `field -> message` pairs.
///
/// Nested structs are joined with `.`, list entries with `[index]`,
/// e.g. `items[0].quantity`. Output is sorted by field name.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    walk_errors(errors, "", &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    out
}

fn walk_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(err.code.to_string()));
                    out.push(FieldViolation {
                        field: path.clone(),
                        message: message.into_owned(),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => walk_errors(inner, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    walk_errors(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
