//! Booking business logic.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, spot::SpotRepository},
    error::AppError,
    model::booking::{BookingAttempt, CreateBookingParams, SpotBookings},
    service::spot::SPOT_NOT_FOUND,
};

pub const BOOKING_CONFLICT: &str = "Sorry, this spot is already booked for the specified dates";

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a spot's bookings, shaped by whether the caller owns the spot.
    ///
    /// Owners get full booking records with each booking user; everyone else
    /// gets the reserved date ranges only.
    ///
    /// # Returns
    /// - `Ok(bookings)` - Owner or guest view of the spot's bookings
    /// - `Err(AppError::NotFound)` - No spot with that id
    pub async fn list_for_spot(
        &self,
        user_id: i32,
        spot_id: i32,
    ) -> Result<SpotBookings, AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let Some(spot) = spot_repo.find_by_id(spot_id).await? else {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        };

        if spot.owner_id == user_id {
            Ok(SpotBookings::Owner(
                booking_repo.list_with_guests(spot.id).await?,
            ))
        } else {
            Ok(SpotBookings::Guest(
                booking_repo.list_for_spot(spot.id).await?,
            ))
        }
    }

    /// Books a spot for a date range.
    ///
    /// Guards, in order: the spot must exist, the caller must not own it, and
    /// the end date must fall after the start date. The availability check
    /// itself happens inside the repository transaction.
    ///
    /// # Returns
    /// - `Ok(booking)` - The created booking
    /// - `Err(AppError::NotFound)` - No spot with that id
    /// - `Err(AppError::Forbidden)` - Caller owns the spot
    /// - `Err(AppError::Validation)` - End date on or before start date
    /// - `Err(AppError::Conflict)` - Dates collide with an existing booking
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, AppError> {
        let spot_repo = SpotRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let Some(spot) = spot_repo.find_by_id(params.spot_id).await? else {
            return Err(AppError::NotFound(SPOT_NOT_FOUND.to_string()));
        };

        if spot.owner_id == params.user_id {
            return Err(AppError::Forbidden);
        }

        if params.end_date <= params.start_date {
            return Err(AppError::validation(
                "endDate",
                "endDate cannot be on or before startDate",
            ));
        }

        match booking_repo.create(params).await? {
            BookingAttempt::Created(booking) => Ok(booking),
            BookingAttempt::Overlapping => {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "startDate".to_string(),
                    "Start date conflicts with an existing booking".to_string(),
                );
                errors.insert(
                    "endDate".to_string(),
                    "End date conflicts with an existing booking".to_string(),
                );
                Err(AppError::Conflict {
                    message: BOOKING_CONFLICT.to_string(),
                    errors,
                })
            }
        }
    }
}
