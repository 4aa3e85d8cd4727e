//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// The spot and reviewing user are required; the review text and star
/// rating default to a positive review.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    spot_id: i32,
    user_id: i32,
    review: String,
    stars: i16,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - review: `"Great place to stay"`
    /// - stars: `4`
    pub fn new(db: &'a DatabaseConnection, spot_id: i32, user_id: i32) -> Self {
        Self {
            db,
            spot_id,
            user_id,
            review: "Great place to stay".to_string(),
            stars: 4,
        }
    }

    /// Sets the review text.
    pub fn review(mut self, review: impl Into<String>) -> Self {
        self.review = review.into();
        self
    }

    /// Sets the star rating.
    pub fn stars(mut self, stars: i16) -> Self {
        self.stars = stars;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            spot_id: ActiveValue::Set(self.spot_id),
            user_id: ActiveValue::Set(self.user_id),
            review: ActiveValue::Set(self.review),
            stars: ActiveValue::Set(self.stars),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
