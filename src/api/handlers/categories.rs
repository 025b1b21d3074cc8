//! Handlers for catalogue category endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{Created, created};
use crate::api::dto::category::{CategoryRequest, CategoryResponse};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::domain::entities::Category;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

fn category_to_response(c: Category) -> CategoryResponse {
    CategoryResponse {
        id: c.id,
        name: c.name,
        slug: c.slug,
        created_at: c.created_at,
    }
}

/// Creates a category; the slug is derived from the name.
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Name or slug already used", body = ErrorBody),
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> Result<Created<CategoryResponse>, AppError> {
    let category = state.category_service.create_category(payload.name).await?;

    Ok(created(
        format!("/api/categories/{}", category.id),
        category_to_response(category),
    ))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses((status = 200, description = "All categories ordered by id", body = [CategoryResponse]))
)]
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(categories.into_iter().map(category_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorBody),
    )
)]
pub async fn get_category_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state.category_service.get_category(id).await?;
    Ok(Json(category_to_response(category)))
}

/// Renames a category and recomputes its slug.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "Name or slug already used", body = ErrorBody),
    )
)]
pub async fn update_category_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state
        .category_service
        .update_category(id, payload.name)
        .await?;

    Ok(Json(category_to_response(category)))
}

/// Deletes a category that has no products.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "Category has products", body = ErrorBody),
    )
)]
pub async fn delete_category_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
