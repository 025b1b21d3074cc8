//! Handlers for customer account endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{Created, created};
use crate::api::dto::user::{UserRequest, UserResponse};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::domain::entities::User;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

fn user_to_response(u: User) -> UserResponse {
    UserResponse {
        id: u.id,
        name: u.name,
        email: u.email,
        created_at: u.created_at,
    }
}

/// Registers a user.
///
/// Name is trimmed, email is trimmed and lower-cased before the uniqueness check.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody),
    )
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Result<Created<UserResponse>, AppError> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    Ok(created(format!("/api/users/{}", user.id), user_to_response(user)))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses((status = 200, description = "All users ordered by id", body = [UserResponse]))
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(user_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn get_user_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user_to_response(user)))
}

/// Replaces a user's name and email.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody),
    )
)]
pub async fn update_user_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .update_user(id, payload.name, payload.email)
        .await?;

    Ok(Json(user_to_response(user)))
}

/// Deletes a user without orders or reviews.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 409, description = "User has orders or reviews", body = ErrorBody),
    )
)]
pub async fn delete_user_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
