//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`            - REST API
//! - `GET /health`       - Health check (database)
//! - `GET /v3/api-docs`  - OpenAPI document
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Error path** - Request path in error envelopes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{error_path::attach_error_path, tracing};
use crate::api::openapi::openapi_handler;
use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/v3/api-docs", get(openapi_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(middleware::from_fn(attach_error_path))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
