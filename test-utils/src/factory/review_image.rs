//! Review image factory helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review image row for the given review.
///
/// # Arguments
/// - `db` - Database connection
/// - `review_id` - Review the image belongs to
/// - `url` - Image URL
///
/// # Returns
/// - `Ok(entity::review_image::Model)` - Created image entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review_image(
    db: &DatabaseConnection,
    review_id: i32,
    url: &str,
) -> Result<entity::review_image::Model, DbErr> {
    let now = Utc::now();
    entity::review_image::ActiveModel {
        review_id: ActiveValue::Set(review_id),
        url: ActiveValue::Set(url.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
