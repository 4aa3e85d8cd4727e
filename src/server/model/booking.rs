//! Booking domain models.

use chrono::NaiveDate;

use crate::model::booking::{
    BookingDto, BookingWithGuestDto, CreateBookingDto, GuestBookingDto,
};

/// Parameters for creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub spot_id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreateBookingParams {
    pub fn from_dto(spot_id: i32, user_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            spot_id,
            user_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

/// Outcome of attempting to insert a booking.
///
/// The availability check and the insert run inside one transaction, so
/// `Overlapping` means another booking held the dates at commit time.
#[derive(Debug)]
pub enum BookingAttempt {
    Created(entity::booking::Model),
    Overlapping,
}

/// Booking joined with the booking user, as shown to the spot owner.
#[derive(Debug, Clone)]
pub struct BookingWithGuest {
    pub booking: entity::booking::Model,
    pub user: Option<entity::user::Model>,
}

impl BookingWithGuest {
    pub fn into_dto(self) -> BookingWithGuestDto {
        BookingWithGuestDto {
            booking: to_booking_dto(self.booking),
            user: self.user.map(Into::into),
        }
    }
}

/// Bookings for a spot, shaped by who is asking.
///
/// Owners see full booking records with the booking user; everyone else sees
/// only the reserved date ranges.
#[derive(Debug)]
pub enum SpotBookings {
    Owner(Vec<BookingWithGuest>),
    Guest(Vec<entity::booking::Model>),
}

/// Converts a booking entity to its full DTO.
pub fn to_booking_dto(booking: entity::booking::Model) -> BookingDto {
    BookingDto {
        id: booking.id,
        spot_id: booking.spot_id,
        user_id: booking.user_id,
        start_date: booking.start_date,
        end_date: booking.end_date,
        created_at: booking.created_at,
        updated_at: booking.updated_at,
    }
}

/// Converts a booking entity to the reduced non-owner DTO.
pub fn to_guest_booking_dto(booking: entity::booking::Model) -> GuestBookingDto {
    GuestBookingDto {
        spot_id: booking.spot_id,
        start_date: booking.start_date,
        end_date: booking.end_date,
    }
}
