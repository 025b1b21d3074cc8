//! DTOs for product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for `POST /api/reviews`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[validate(required(message = "must not be null"))]
    pub user_id: Option<i64>,

    #[validate(required(message = "must not be null"))]
    pub product_id: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(max = 600, message = "size must be between 0 and 600"))]
    pub comment: Option<String>,
}

/// Request body for `PATCH /api/reviews/{id}`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct PatchReviewRequest {
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i32>,

    #[validate(length(max = 600, message = "size must be between 0 and 600"))]
    pub comment: Option<String>,
}

/// Query string for `GET /api/reviews`.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReviewListQuery {
    /// Only reviews of this product.
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub product_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[test]
    fn test_list_query_product_is_optional() {
        let uri: Uri = "/api/reviews".parse().unwrap();
        let query = Query::<ReviewListQuery>::try_from_uri(&uri).unwrap().0;
        assert_eq!(query.product_id, None);

        let uri: Uri = "/api/reviews?productId=9".parse().unwrap();
        let query = Query::<ReviewListQuery>::try_from_uri(&uri).unwrap().0;
        assert_eq!(query.product_id, Some(9));
    }

    #[test]
    fn test_rating_bounds() {
        let req: CreateReviewRequest =
            serde_json::from_str(r#"{"userId":1,"productId":2,"rating":6}"#).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("rating"));

        let req: CreateReviewRequest =
            serde_json::from_str(r#"{"userId":1,"productId":2,"rating":5,"comment":"ok"}"#)
                .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_comment_length() {
        let req = PatchReviewRequest {
            rating: None,
            comment: Some("x".repeat(601)),
        };
        assert!(req.validate().is_err());
    }
}
