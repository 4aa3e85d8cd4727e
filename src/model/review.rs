use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::spot::OwnerDto;

/// Bare review fields, returned from create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub spot_id: i32,
    pub user_id: i32,
    pub review: String,
    pub stars: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Image attached to a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewImageDto {
    pub id: i32,
    pub url: String,
}

/// Review list item with reviewer summary and attached images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewWithRelationsDto {
    #[serde(flatten)]
    pub review: ReviewDto,
    #[serde(rename = "User")]
    pub user: Option<OwnerDto>,
    #[serde(rename = "ReviewImages")]
    pub review_images: Vec<ReviewImageDto>,
}

/// Response envelope for `GET /spots/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewListDto {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<ReviewWithRelationsDto>,
}

/// Request body for `POST /spots/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub review: String,
    pub stars: i16,
}
