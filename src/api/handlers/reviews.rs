//! Handlers for product review endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{Created, created, required};
use crate::api::dto::review::{
    CreateReviewRequest, PatchReviewRequest, ReviewListQuery, ReviewResponse,
};
use crate::api::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

fn review_to_response(r: Review) -> ReviewResponse {
    ReviewResponse {
        id: r.id,
        user_id: r.user_id,
        product_id: r.product_id,
        rating: r.rating,
        comment: r.comment,
        created_at: r.created_at,
    }
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "User or product not found", body = ErrorBody),
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateReviewRequest>,
) -> Result<Created<ReviewResponse>, AppError> {
    let new_review = NewReview {
        user_id: required(payload.user_id, "user_id")?,
        product_id: required(payload.product_id, "product_id")?,
        rating: payload.rating,
        comment: payload.comment,
    };

    let review = state.review_service.create_review(new_review).await?;

    Ok(created(
        format!("/api/reviews/{}", review.id),
        review_to_response(review),
    ))
}

/// Lists reviews, optionally only those of `productId`.
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "reviews",
    params(ReviewListQuery),
    responses((status = 200, description = "Reviews ordered by id", body = [ReviewResponse]))
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ReviewListQuery>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.review_service.list_reviews(query.product_id).await?;
    Ok(Json(reviews.into_iter().map(review_to_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review", body = ReviewResponse),
        (status = 404, description = "Review not found", body = ErrorBody),
    )
)]
pub async fn get_review_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state.review_service.get_review(id).await?;
    Ok(Json(review_to_response(review)))
}

#[utoipa::path(
    patch,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    request_body = PatchReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ReviewResponse),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Review not found", body = ErrorBody),
    )
)]
pub async fn patch_review_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PatchReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let patch = ReviewPatch {
        rating: payload.rating,
        comment: payload.comment,
    };

    let review = state.review_service.update_review(id, patch).await?;
    Ok(Json(review_to_response(review)))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found", body = ErrorBody),
    )
)]
pub async fn delete_review_handler(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.review_service.delete_review(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
