//! Review domain models and star-rating aggregation.

use crate::model::review::{
    CreateReviewDto, ReviewDto, ReviewImageDto, ReviewWithRelationsDto,
};

/// Aggregated review statistics for a spot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    /// Mean star rating rounded to one decimal place, `None` with no reviews.
    pub avg_rating: Option<f64>,
    pub review_count: u64,
}

/// Computes the average star rating across a spot's reviews.
///
/// The mean is rounded to one decimal place. An empty slice yields a `None`
/// average with a zero count, which serializes as an explicit null.
pub fn summarize_stars(stars: &[i16]) -> RatingSummary {
    if stars.is_empty() {
        return RatingSummary {
            avg_rating: None,
            review_count: 0,
        };
    }

    let sum: i64 = stars.iter().map(|s| i64::from(*s)).sum();
    let mean = sum as f64 / stars.len() as f64;

    RatingSummary {
        avg_rating: Some((mean * 10.0).round() / 10.0),
        review_count: stars.len() as u64,
    }
}

/// Parameters for creating a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub spot_id: i32,
    pub user_id: i32,
    pub review: String,
    pub stars: i16,
}

impl CreateReviewParams {
    pub fn from_dto(spot_id: i32, user_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            spot_id,
            user_id,
            review: dto.review,
            stars: dto.stars,
        }
    }
}

/// Review with its reviewer and attached images for the listing view.
#[derive(Debug, Clone)]
pub struct ReviewWithRelations {
    pub review: entity::review::Model,
    pub user: Option<entity::user::Model>,
    pub images: Vec<entity::review_image::Model>,
}

impl ReviewWithRelations {
    pub fn into_dto(self) -> ReviewWithRelationsDto {
        ReviewWithRelationsDto {
            review: to_review_dto(self.review),
            user: self.user.map(Into::into),
            review_images: self.images.into_iter().map(to_review_image_dto).collect(),
        }
    }
}

/// Converts a review entity to its bare DTO.
pub fn to_review_dto(review: entity::review::Model) -> ReviewDto {
    ReviewDto {
        id: review.id,
        spot_id: review.spot_id,
        user_id: review.user_id,
        review: review.review,
        stars: review.stars,
        created_at: review.created_at,
        updated_at: review.updated_at,
    }
}

/// Converts a review image entity to its DTO.
pub fn to_review_image_dto(image: entity::review_image::Model) -> ReviewImageDto {
    ReviewImageDto {
        id: image.id,
        url: image.url,
    }
}
