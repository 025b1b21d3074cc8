//! Product review service.

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::domain::repositories::{ProductRepository, ReviewRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub struct ReviewService<R: ReviewRepository, U: UserRepository, P: ProductRepository> {
    repository: Arc<R>,
    user_repository: Arc<U>,
    product_repository: Arc<P>,
}

impl<R, U, P> ReviewService<R, U, P>
where
    R: ReviewRepository,
    U: UserRepository,
    P: ProductRepository,
{
    pub fn new(repository: Arc<R>, user_repository: Arc<U>, product_repository: Arc<P>) -> Self {
        Self {
            repository,
            user_repository,
            product_repository,
        }
    }

    /// Records a review by an existing user for an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or product does not exist.
    /// Returns [`AppError::Validation`] if the rating is outside 1..=5.
    pub async fn create_review(&self, new_review: NewReview) -> Result<Review, AppError> {
        check_rating(Some(new_review.rating))?;

        if self
            .user_repository
            .find_by_id(new_review.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "User not found",
                json!({"user_id": new_review.user_id}),
            ));
        }

        if self
            .product_repository
            .find_by_id(new_review.product_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Product not found",
                json!({"product_id": new_review.product_id}),
            ));
        }

        self.repository.create(new_review).await
    }

    /// Lists reviews, optionally only those for `product_id`.
    pub async fn list_reviews(&self, product_id: Option<i64>) -> Result<Vec<Review>, AppError> {
        self.repository.list(product_id).await
    }

    pub async fn get_review(&self, id: i64) -> Result<Review, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found", json!({"id": id})))
    }

    /// Updates rating and/or comment; `None` fields are left unchanged.
    pub async fn update_review(&self, id: i64, patch: ReviewPatch) -> Result<Review, AppError> {
        check_rating(patch.rating)?;
        let existing = self.get_review(id).await?;

        if patch.rating.is_none() && patch.comment.is_none() {
            return Ok(existing);
        }

        self.repository.update(id, patch).await
    }

    pub async fn delete_review(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

fn check_rating(rating: Option<i32>) -> Result<(), AppError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(AppError::bad_request(
            "Rating must be between 1 and 5",
            json!({"rating": r}),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Money, Product, User};
    use crate::domain::repositories::{
        MockProductRepository, MockReviewRepository, MockUserRepository,
    };
    use chrono::Utc;

    fn create_test_review(id: i64, rating: i32, comment: Option<&str>) -> Review {
        Review {
            id,
            user_id: 1,
            product_id: 2,
            rating,
            comment: comment.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn user_repo(found: bool) -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(found.then(|| User::new(id, "Ali".into(), "ali@example.com".into(), Utc::now())))
        });
        repo
    }

    fn product_repo(found: bool) -> MockProductRepository {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(found.then(|| Product {
                id,
                name: "Laptop".to_string(),
                sku: "SKU-1".to_string(),
                price: Money::from_cents(100),
                stock: 1,
                category_id: 1,
                category_name: "Electronics".to_string(),
                created_at: Utc::now(),
            }))
        });
        repo
    }

    fn new_review(rating: i32) -> NewReview {
        NewReview {
            user_id: 1,
            product_id: 2,
            rating,
            comment: Some("Great".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_review_success() {
        let mut mock_repo = MockReviewRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|r| Ok(create_test_review(1, r.rating, r.comment.as_deref())));

        let service = ReviewService::new(
            Arc::new(mock_repo),
            Arc::new(user_repo(true)),
            Arc::new(product_repo(true)),
        );

        let review = service.create_review(new_review(5)).await.unwrap();

        assert_eq!(review.rating, 5);
        assert_eq!(review.comment.as_deref(), Some("Great"));
    }

    #[tokio::test]
    async fn test_create_review_unknown_product() {
        let mut mock_repo = MockReviewRepository::new();
        mock_repo.expect_create().never();

        let service = ReviewService::new(
            Arc::new(mock_repo),
            Arc::new(user_repo(true)),
            Arc::new(product_repo(false)),
        );

        let result = service.create_review(new_review(4)).await;

        match result.unwrap_err() {
            AppError::NotFound { message, .. } => assert_eq!(message, "Product not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_review_rating_out_of_range() {
        let service = ReviewService::new(
            Arc::new(MockReviewRepository::new()),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProductRepository::new()),
        );

        let result = service.create_review(new_review(6)).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_review_rating_only() {
        let mut mock_repo = MockReviewRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_review(id, 3, Some("ok")))));
        mock_repo
            .expect_update()
            .withf(|id, p| *id == 4 && p.rating == Some(1) && p.comment.is_none())
            .times(1)
            .returning(|id, p| Ok(create_test_review(id, p.rating.unwrap_or(3), Some("ok"))));

        let service = ReviewService::new(
            Arc::new(mock_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProductRepository::new()),
        );

        let patch = ReviewPatch {
            rating: Some(1),
            comment: None,
        };
        let review = service.update_review(4, patch).await.unwrap();

        assert_eq!(review.rating, 1);
        assert_eq!(review.comment.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_get_review_not_found() {
        let mut mock_repo = MockReviewRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ReviewService::new(
            Arc::new(mock_repo),
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProductRepository::new()),
        );

        let result = service.get_review(1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
