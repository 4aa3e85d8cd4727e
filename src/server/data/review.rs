//! Review data repository for database operations.
//!
//! Serves both the review listing for a spot and the star aggregates the
//! spot endpoints fold into their responses.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::review::{CreateReviewParams, ReviewWithRelations};

/// Repository providing database operations for reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the star values of every review for a spot.
    ///
    /// Feeds the rating aggregation; order is irrelevant to a mean so none is
    /// imposed.
    pub async fn stars_for_spot(&self, spot_id: i32) -> Result<Vec<i16>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::SpotId.eq(spot_id))
            .select_only()
            .column(entity::review::Column::Stars)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Lists a spot's reviews with each reviewer and their attached images.
    ///
    /// # Returns
    /// - `Ok(reviews)` - Reviews ordered by id, each with user and images
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_with_relations(
        &self,
        spot_id: i32,
    ) -> Result<Vec<ReviewWithRelations>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(entity::review::Column::SpotId.eq(spot_id))
            .order_by_asc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(reviews.len());

        for (review, user) in reviews {
            let images = entity::prelude::ReviewImage::find()
                .filter(entity::review_image::Column::ReviewId.eq(review.id))
                .order_by_asc(entity::review_image::Column::Id)
                .all(self.db)
                .await?;

            result.push(ReviewWithRelations {
                review,
                user,
                images,
            });
        }

        Ok(result)
    }

    /// Checks whether a user has already reviewed a spot.
    ///
    /// # Returns
    /// - `Ok(true)` - User has an existing review for the spot
    /// - `Ok(false)` - No review from this user yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists_for_user(&self, spot_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::SpotId.eq(spot_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new review.
    ///
    /// # Returns
    /// - `Ok(review)` - The created review
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateReviewParams,
    ) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        let review = entity::prelude::Review::insert(entity::review::ActiveModel {
            spot_id: ActiveValue::Set(param.spot_id),
            user_id: ActiveValue::Set(param.user_id),
            review: ActiveValue::Set(param.review),
            stars: ActiveValue::Set(param.stars),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(review)
    }
}
