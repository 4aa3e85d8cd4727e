use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::spot::OwnerDto;

/// Full booking record, returned to owners and to the booking creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub spot_id: i32,
    pub user_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full booking record with the booking user, as seen by the spot owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingWithGuestDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    #[serde(rename = "User")]
    pub user: Option<OwnerDto>,
}

/// Reduced booking record shown to non-owners: dates only, no booking user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestBookingDto {
    pub spot_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response envelope for `GET /spots/{id}/bookings` when the caller owns the spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerBookingListDto {
    #[serde(rename = "Bookings")]
    pub bookings: Vec<BookingWithGuestDto>,
}

/// Response envelope for `GET /spots/{id}/bookings` for everyone else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuestBookingListDto {
    #[serde(rename = "Bookings")]
    pub bookings: Vec<GuestBookingDto>,
}

/// Request body for `POST /spots/{id}/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
