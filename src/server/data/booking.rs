//! Booking data repository for database operations.
//!
//! The insert runs its availability check and the write inside a single
//! transaction, so two concurrent requests for the same dates cannot both
//! succeed.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::model::booking::{BookingAttempt, BookingWithGuest, CreateBookingParams};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a spot's bookings, ordered by id.
    pub async fn list_for_spot(
        &self,
        spot_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::SpotId.eq(spot_id))
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists a spot's bookings joined with each booking user.
    ///
    /// Used for the owner's view of a spot's bookings.
    pub async fn list_with_guests(
        &self,
        spot_id: i32,
    ) -> Result<Vec<BookingWithGuest>, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::SpotId.eq(spot_id))
            .order_by_asc(entity::booking::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(bookings
            .into_iter()
            .map(|(booking, user)| BookingWithGuest { booking, user })
            .collect())
    }

    /// Inserts a booking if the requested dates are free.
    ///
    /// A stored booking conflicts when its range intersects the requested one
    /// at any point, endpoints included: stored.start <= requested.end and
    /// stored.end >= requested.start. The check and the insert share one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(BookingAttempt::Created(booking))` - Dates were free, booking stored
    /// - `Ok(BookingAttempt::Overlapping)` - Dates collide with an existing booking
    /// - `Err(DbErr)` - Database error, nothing was written
    pub async fn create(&self, param: CreateBookingParams) -> Result<BookingAttempt, DbErr> {
        let txn = self.db.begin().await?;

        let conflicting = entity::prelude::Booking::find()
            .filter(entity::booking::Column::SpotId.eq(param.spot_id))
            .filter(entity::booking::Column::StartDate.lte(param.end_date))
            .filter(entity::booking::Column::EndDate.gte(param.start_date))
            .count(&txn)
            .await?;

        if conflicting > 0 {
            txn.rollback().await?;
            return Ok(BookingAttempt::Overlapping);
        }

        let now = Utc::now();
        let booking = entity::prelude::Booking::insert(entity::booking::ActiveModel {
            spot_id: ActiveValue::Set(param.spot_id),
            user_id: ActiveValue::Set(param.user_id),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        Ok(BookingAttempt::Created(booking))
    }
}
