//! Liveness and database readiness.

use axum::{Json, extract::State, http::StatusCode};
use std::time::Instant;

use crate::api::dto::health::{
    CheckStatus, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::state::AppState;

/// Reports service health.
///
/// Answers 200 when every component is up and 503 otherwise; the body has
/// the same shape in both cases.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected", "latencyMs": 1, "schemaVersion": 20250101000000 }
///   }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "All components healthy", body = HealthResponse),
        (status = 503, description = "One or more components degraded", body = HealthResponse),
    )
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state).await;

    let (code, status) = if database.is_ok() {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded)
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database },
    };

    (code, Json(response))
}

async fn check_database(state: &AppState) -> CheckStatus {
    let started = Instant::now();
    let probe = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.db)
        .await;
    let latency_ms = started.elapsed().as_millis() as u64;

    match probe {
        Ok(_) => {
            let schema_version = sqlx::query_scalar::<_, Option<i64>>(
                "SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1",
            )
            .fetch_one(&state.db)
            .await
            .ok()
            .flatten();

            CheckStatus {
                status: ComponentStatus::Ok,
                message: Some("Connected".to_string()),
                latency_ms,
                schema_version,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            CheckStatus {
                status: ComponentStatus::Error,
                message: Some(format!("Database error: {e}")),
                latency_ms,
                schema_version: None,
            }
        }
    }
}
