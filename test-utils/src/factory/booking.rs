//! Booking factory for creating test booking entities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable dates.
///
/// The spot and booking user are required. Dates default to a fixed range so
/// overlap tests can position their own ranges around it deterministically.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    spot_id: i32,
    user_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_date: `2026-03-01`
    /// - end_date: `2026-03-05`
    pub fn new(db: &'a DatabaseConnection, spot_id: i32, user_id: i32) -> Self {
        Self {
            db,
            spot_id,
            user_id,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        }
    }

    /// Sets the booking date range.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// Inserts directly, bypassing the availability check. Use this to seed
    /// existing bookings when testing the overlap logic itself.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            spot_id: ActiveValue::Set(self.spot_id),
            user_id: ActiveValue::Set(self.user_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
