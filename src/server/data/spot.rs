//! Spot data repository for database operations.
//!
//! Provides the filtered listing query behind `GET /spots` along with owner
//! lookups and spot writes. Deleting a spot removes its dependent rows in the
//! same transaction so a failure partway through leaves nothing dangling.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::spot::{CreateSpotParams, SpotFilter, UpdateSpotParams};

/// Repository providing database operations for spots.
pub struct SpotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpotRepository<'a> {
    /// Creates a new SpotRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a spot by id.
    ///
    /// # Returns
    /// - `Ok(Some(spot))` - Spot found
    /// - `Ok(None)` - No spot with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::spot::Model>, DbErr> {
        entity::prelude::Spot::find_by_id(id).one(self.db).await
    }

    /// Lists all spots owned by a user, ordered by id.
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<entity::spot::Model>, DbErr> {
        entity::prelude::Spot::find()
            .filter(entity::spot::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::spot::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists spots matching the filter, one page at a time.
    ///
    /// Each filter bound is applied inclusively and independently; absent
    /// bounds add no condition. Results are ordered by id so pages are stable.
    ///
    /// # Arguments
    /// - `filter` - Optional lat/lng/price bounds
    /// - `limit` - Page size
    /// - `offset` - Rows to skip before the page starts
    ///
    /// # Returns
    /// - `Ok(spots)` - The matching page of spots
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        filter: &SpotFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::spot::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(min_lat) = filter.min_lat {
            condition = condition.add(entity::spot::Column::Lat.gte(min_lat));
        }
        if let Some(max_lat) = filter.max_lat {
            condition = condition.add(entity::spot::Column::Lat.lte(max_lat));
        }
        if let Some(min_lng) = filter.min_lng {
            condition = condition.add(entity::spot::Column::Lng.gte(min_lng));
        }
        if let Some(max_lng) = filter.max_lng {
            condition = condition.add(entity::spot::Column::Lng.lte(max_lng));
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(entity::spot::Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(entity::spot::Column::Price.lte(max_price));
        }

        entity::prelude::Spot::find()
            .filter(condition)
            .order_by_asc(entity::spot::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Inserts a new spot.
    ///
    /// # Returns
    /// - `Ok(spot)` - The created spot
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSpotParams) -> Result<entity::spot::Model, DbErr> {
        let now = Utc::now();
        let spot = entity::prelude::Spot::insert(entity::spot::ActiveModel {
            owner_id: ActiveValue::Set(param.owner_id),
            address: ActiveValue::Set(param.address),
            city: ActiveValue::Set(param.city),
            state: ActiveValue::Set(param.state),
            country: ActiveValue::Set(param.country),
            lat: ActiveValue::Set(param.lat),
            lng: ActiveValue::Set(param.lng),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(spot)
    }

    /// Applies a partial update to a spot.
    ///
    /// Only fields present in the params are written; everything else keeps
    /// its stored value. `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `spot` - The current spot record
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(spot)` - The updated spot
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        spot: entity::spot::Model,
        param: UpdateSpotParams,
    ) -> Result<entity::spot::Model, DbErr> {
        let mut active: entity::spot::ActiveModel = spot.into();

        if let Some(address) = param.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(city) = param.city {
            active.city = ActiveValue::Set(city);
        }
        if let Some(state) = param.state {
            active.state = ActiveValue::Set(state);
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(country);
        }
        if let Some(lat) = param.lat {
            active.lat = ActiveValue::Set(lat);
        }
        if let Some(lng) = param.lng {
            active.lng = ActiveValue::Set(lng);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(price);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        entity::prelude::Spot::update(active).exec(self.db).await
    }

    /// Deletes a spot and every row that references it.
    ///
    /// Review images, reviews, spot images, and bookings for the spot are
    /// removed along with the spot itself, all inside one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Spot and dependents deleted
    /// - `Err(DbErr)` - Database error, nothing was deleted
    pub async fn delete_cascade(&self, spot_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let review_ids: Vec<i32> = entity::prelude::Review::find()
            .filter(entity::review::Column::SpotId.eq(spot_id))
            .select_only()
            .column(entity::review::Column::Id)
            .into_tuple()
            .all(&txn)
            .await?;

        if !review_ids.is_empty() {
            entity::prelude::ReviewImage::delete_many()
                .filter(entity::review_image::Column::ReviewId.is_in(review_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::SpotId.eq(spot_id))
            .exec(&txn)
            .await?;

        entity::prelude::SpotImage::delete_many()
            .filter(entity::spot_image::Column::SpotId.eq(spot_id))
            .exec(&txn)
            .await?;

        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::SpotId.eq(spot_id))
            .exec(&txn)
            .await?;

        entity::prelude::Spot::delete_by_id(spot_id).exec(&txn).await?;

        txn.commit().await
    }
}
