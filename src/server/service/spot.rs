//! Spot business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        review::ReviewRepository, spot::SpotRepository, spot_image::SpotImageRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        review::summarize_stars,
        spot::{
            CreateSpotParams, Page, PaginatedSpots, SpotDetails, SpotFilter, SpotSummary,
            UpdateSpotParams,
        },
    },
};

pub const SPOT_NOT_FOUND: &str = "Spot couldn't be found";
pub const SPOT_IMAGE_NOT_FOUND: &str = "Spot Image couldn't be found";

pub struct SpotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists spots matching the filter, one page at a time, with each spot's
    /// average rating and preview image.
    ///
    /// The aggregates are resolved per spot, so a page of N spots issues N
    /// rating queries and N preview lookups.
    pub async fn list(&self, filter: &SpotFilter, page: Page) -> Result<PaginatedSpots, AppError> {
        let spot_repo = SpotRepository::new(self.db);

        let spots = spot_repo.list(filter, page.size, page.offset()).await?;
        let spots = self.summarize(spots).await?;

        Ok(PaginatedSpots {
            spots,
            page: page.page,
            size: page.size,
        })
    }

    /// Lists the spots owned by a user, with the same aggregates as the
    /// public listing.
    pub async fn owned_by(&self, owner_id: i32) -> Result<Vec<SpotSummary>, AppError> {
        let spot_repo = SpotRepository::new(self.db);

        let spots = spot_repo.list_by_owner(owner_id).await?;
        self.summarize(spots).await
    }

    /// Loads a spot's details view: images, owner, and rating aggregates.
    ///
    /// # Returns
    /// - `Ok(details)` - The spot with relations
    /// - `Err(AppError::NotFound)` - No spot with that id
    pub async fn details(&self, spot_id: i32) -> Result<SpotDetails, AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);
        let image_repo = SpotImageRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(spot) = spot_repo.find_by_id(spot_id).await? else {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        };

        let owner = user_repo.find_by_id(spot.owner_id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Spot {} has no owner row", spot.id))
        })?;

        let stars = review_repo.stars_for_spot(spot.id).await?;
        let images = image_repo.list_for_spot(spot.id).await?;

        Ok(SpotDetails {
            spot,
            owner,
            images,
            rating: summarize_stars(&stars),
        })
    }

    /// Creates a spot owned by the given user.
    pub async fn create(
        &self,
        params: CreateSpotParams,
    ) -> Result<entity::spot::Model, AppError> {
        let spot_repo = SpotRepository::new(self.db);

        Ok(spot_repo.create(params).await?)
    }

    /// Partially updates a spot the user owns.
    ///
    /// # Returns
    /// - `Ok(spot)` - The updated spot
    /// - `Err(AppError::NotFound)` - No spot with that id
    /// - `Err(AppError::Forbidden)` - Caller does not own the spot
    pub async fn update(
        &self,
        user_id: i32,
        spot_id: i32,
        params: UpdateSpotParams,
    ) -> Result<entity::spot::Model, AppError> {
        let spot_repo = SpotRepository::new(self.db);

        let spot = self.owned_spot(&spot_repo, user_id, spot_id).await?;

        Ok(spot_repo.update(spot, params).await?)
    }

    /// Deletes a spot the user owns, along with all dependent rows.
    ///
    /// # Returns
    /// - `Ok(())` - Spot and dependents deleted
    /// - `Err(AppError::NotFound)` - No spot with that id
    /// - `Err(AppError::Forbidden)` - Caller does not own the spot
    pub async fn delete(&self, user_id: i32, spot_id: i32) -> Result<(), AppError> {
        let spot_repo = SpotRepository::new(self.db);

        let spot = self.owned_spot(&spot_repo, user_id, spot_id).await?;

        Ok(spot_repo.delete_cascade(spot.id).await?)
    }

    /// Attaches an image to a spot the user owns.
    pub async fn add_image(
        &self,
        user_id: i32,
        spot_id: i32,
        url: String,
        preview: bool,
    ) -> Result<entity::spot_image::Model, AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let image_repo = SpotImageRepository::new(self.db);

        let spot = self.owned_spot(&spot_repo, user_id, spot_id).await?;

        Ok(image_repo.create(spot.id, url, preview).await?)
    }

    /// Deletes one of a spot's images.
    ///
    /// An image attached to a different spot is reported as missing, not as a
    /// permission failure.
    ///
    /// # Returns
    /// - `Ok(())` - Image deleted
    /// - `Err(AppError::NotFound)` - Spot or image missing
    /// - `Err(AppError::Forbidden)` - Caller does not own the spot
    pub async fn delete_image(
        &self,
        user_id: i32,
        spot_id: i32,
        image_id: i32,
    ) -> Result<(), AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let image_repo = SpotImageRepository::new(self.db);

        let Some(spot) = spot_repo.find_by_id(spot_id).await? else {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        };

        let image = image_repo.find_by_id(image_id).await?;
        let image = match image {
            Some(image) if image.spot_id == spot.id => image,
            _ => return Err(AppError::NotFound(SPOT_IMAGE_NOT_FOUND.to_string())),
        };

        if spot.owner_id != user_id {
            return Err(AppError::Forbidden);
        }

        Ok(image_repo.delete(image.id).await?)
    }

    /// Loads a spot and verifies the caller owns it. NotFound wins over
    /// Forbidden.
    async fn owned_spot(
        &self,
        spot_repo: &SpotRepository<'_>,
        user_id: i32,
        spot_id: i32,
    ) -> Result<entity::spot::Model, AppError> {
        let Some(spot) = spot_repo.find_by_id(spot_id).await? else {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        };

        if spot.owner_id != user_id {
            return Err(AppError::Forbidden);
        }

        Ok(spot)
    }

    /// Resolves the rating and preview aggregates for each spot.
    async fn summarize(
        &self,
        spots: Vec<entity::spot::Model>,
    ) -> Result<Vec<SpotSummary>, AppError> {
        let review_repo = ReviewRepository::new(self.db);
        let image_repo = SpotImageRepository::new(self.db);

        let mut summaries = Vec::with_capacity(spots.len());

        for spot in spots {
            let stars = review_repo.stars_for_spot(spot.id).await?;
            let preview_image = image_repo.preview_url(spot.id).await?;

            summaries.push(SpotSummary {
                avg_rating: summarize_stars(&stars).avg_rating,
                preview_image,
                spot,
            });
        }

        Ok(summaries)
    }
}
