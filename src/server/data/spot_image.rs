//! Spot image data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for spot images.
pub struct SpotImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpotImageRepository<'a> {
    /// Creates a new SpotImageRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches an image to a spot.
    ///
    /// # Arguments
    /// - `spot_id` - The spot the image belongs to
    /// - `url` - Image URL
    /// - `preview` - Whether this image is the spot's preview
    ///
    /// # Returns
    /// - `Ok(image)` - The created image
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        spot_id: i32,
        url: String,
        preview: bool,
    ) -> Result<entity::spot_image::Model, DbErr> {
        let now = Utc::now();
        let image = entity::prelude::SpotImage::insert(entity::spot_image::ActiveModel {
            spot_id: ActiveValue::Set(spot_id),
            url: ActiveValue::Set(url),
            preview: ActiveValue::Set(preview),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(image)
    }

    /// Finds a spot image by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::spot_image::Model>, DbErr> {
        entity::prelude::SpotImage::find_by_id(id).one(self.db).await
    }

    /// Lists all images for a spot, ordered by id.
    pub async fn list_for_spot(
        &self,
        spot_id: i32,
    ) -> Result<Vec<entity::spot_image::Model>, DbErr> {
        entity::prelude::SpotImage::find()
            .filter(entity::spot_image::Column::SpotId.eq(spot_id))
            .order_by_asc(entity::spot_image::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the URL of the spot's preview image, if one is set.
    ///
    /// When multiple images are flagged as preview, the oldest wins.
    ///
    /// # Returns
    /// - `Ok(Some(url))` - Preview image URL
    /// - `Ok(None)` - Spot has no preview image
    /// - `Err(DbErr)` - Database error during query
    pub async fn preview_url(&self, spot_id: i32) -> Result<Option<String>, DbErr> {
        let image = entity::prelude::SpotImage::find()
            .filter(entity::spot_image::Column::SpotId.eq(spot_id))
            .filter(entity::spot_image::Column::Preview.eq(true))
            .order_by_asc(entity::spot_image::Column::Id)
            .one(self.db)
            .await?;

        Ok(image.map(|image| image.url))
    }

    /// Deletes a spot image by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::SpotImage::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
