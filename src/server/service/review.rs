//! Review business logic.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{review::ReviewRepository, spot::SpotRepository},
    error::AppError,
    model::review::{CreateReviewParams, ReviewWithRelations},
    service::spot::SPOT_NOT_FOUND,
};

pub const DUPLICATE_REVIEW: &str = "User already has a review for this spot";
pub const OWNER_REVIEW: &str = "Owner of spot cannot leave a review";

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a spot's reviews with reviewer and images.
    ///
    /// # Returns
    /// - `Ok(reviews)` - The spot's reviews
    /// - `Err(AppError::NotFound)` - No spot with that id
    pub async fn list_for_spot(&self, spot_id: i32) -> Result<Vec<ReviewWithRelations>, AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if spot_repo.find_by_id(spot_id).await?.is_none() {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        }

        Ok(review_repo.list_with_relations(spot_id).await?)
    }

    /// Creates a review for a spot.
    ///
    /// Guards, in order: the body must carry review text plus a star rating
    /// from 1 to 5, the spot must exist, the user must not have reviewed it
    /// already, and the user must not own it. Validation runs first, before
    /// any lookup.
    ///
    /// # Returns
    /// - `Ok(review)` - The created review
    /// - `Err(AppError::Validation)` - Bad stars or empty review text
    /// - `Err(AppError::NotFound)` - No spot with that id
    /// - `Err(AppError::Conflict)` - Duplicate review, or the actor owns the spot
    pub async fn create(
        &self,
        params: CreateReviewParams,
    ) -> Result<entity::review::Model, AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if params.review.trim().is_empty() {
            return Err(AppError::validation("review", "Review text is required"));
        }
        if !(1..=5).contains(&params.stars) {
            return Err(AppError::validation(
                "stars",
                "Stars must be an integer from 1 to 5",
            ));
        }

        let Some(spot) = spot_repo.find_by_id(params.spot_id).await? else {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        };

        if review_repo
            .exists_for_user(spot.id, params.user_id)
            .await?
        {
            return Err(AppError::Conflict {
                message: DUPLICATE_REVIEW.to_string(),
                errors: BTreeMap::new(),
            });
        }

        if spot.owner_id == params.user_id {
            return Err(AppError::Conflict {
                message: OWNER_REVIEW.to_string(),
                errors: BTreeMap::new(),
            });
        }

        Ok(review_repo.create(params).await?)
    }
}
