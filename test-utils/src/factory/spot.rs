//! Spot factory for creating test spot entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test spots with customizable fields.
///
/// The owning user id is required; all other fields default to plausible
/// listing data and can be overridden for filter and pagination tests.
pub struct SpotFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    address: String,
    city: String,
    state: String,
    country: String,
    lat: f64,
    lng: f64,
    name: String,
    description: String,
    price: f64,
}

impl<'a> SpotFactory<'a> {
    /// Creates a new SpotFactory with default values.
    ///
    /// Defaults:
    /// - address: `"{id} Main St"`
    /// - city/state/country: `"Portland"` / `"OR"` / `"USA"`
    /// - lat/lng: `45.52` / `-122.68`
    /// - name: `"Spot {id}"`
    /// - price: `100.0`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            address: format!("{} Main St", id),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            country: "USA".to_string(),
            lat: 45.52,
            lng: -122.68,
            name: format!("Spot {}", id),
            description: "A comfortable place to stay".to_string(),
            price: 100.0,
        }
    }

    /// Sets the spot name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the latitude.
    pub fn lat(mut self, lat: f64) -> Self {
        self.lat = lat;
        self
    }

    /// Sets the longitude.
    pub fn lng(mut self, lng: f64) -> Self {
        self.lng = lng;
        self
    }

    /// Sets the nightly price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the spot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::spot::Model)` - Created spot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::spot::Model, DbErr> {
        let now = Utc::now();
        entity::spot::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            country: ActiveValue::Set(self.country),
            lat: ActiveValue::Set(self.lat),
            lng: ActiveValue::Set(self.lng),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
