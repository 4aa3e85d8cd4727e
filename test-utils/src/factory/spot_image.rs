//! Spot image factory helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a spot image row for the given spot.
///
/// # Arguments
/// - `db` - Database connection
/// - `spot_id` - Spot the image belongs to
/// - `url` - Image URL
/// - `preview` - Whether the image is flagged as the listing preview
///
/// # Returns
/// - `Ok(entity::spot_image::Model)` - Created image entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_spot_image(
    db: &DatabaseConnection,
    spot_id: i32,
    url: &str,
    preview: bool,
) -> Result<entity::spot_image::Model, DbErr> {
    let now = Utc::now();
    entity::spot_image::ActiveModel {
        spot_id: ActiveValue::Set(spot_id),
        url: ActiveValue::Set(url.to_string()),
        preview: ActiveValue::Set(preview),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
