use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            BookingDto, CreateBookingDto, GuestBookingListDto, OwnerBookingListDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{
            to_booking_dto, to_guest_booking_dto, BookingWithGuest, CreateBookingParams,
            SpotBookings,
        },
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List a spot's bookings.
///
/// The spot's owner sees full booking records with each booking user;
/// everyone else sees only the reserved date ranges.
///
/// # Returns
/// - `200 OK` - Owner or guest view of the spot's bookings
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spots/{id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    responses(
        (status = 200, description = "The spot's bookings (full for the owner, dates only otherwise)", body = OwnerBookingListDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spot_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(spot_id): Path<i32>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookingService::new(&state.db);

    let response = match service.list_for_spot(user.id, spot_id).await? {
        SpotBookings::Owner(bookings) => Json(OwnerBookingListDto {
            bookings: bookings
                .into_iter()
                .map(BookingWithGuest::into_dto)
                .collect(),
        })
        .into_response(),
        SpotBookings::Guest(bookings) => Json(GuestBookingListDto {
            bookings: bookings.into_iter().map(to_guest_booking_dto).collect(),
        })
        .into_response(),
    };

    Ok(response)
}

/// Book a spot.
///
/// Owners cannot book their own spot; the requested dates must be free, and
/// the end date must fall after the start date.
///
/// # Returns
/// - `200 OK` - The created booking
/// - `400 Bad Request` - End date on or before start date
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller owns the spot, or the dates are taken
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/spots/{id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Booking created", body = BookingDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Owner booking or date conflict", body = ErrorDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_spot_booking(
    State(state): State<AppState>,
    session: Session,
    Path(spot_id): Path<i32>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = BookingService::new(&state.db);
    let booking = service
        .create(CreateBookingParams::from_dto(spot_id, user.id, payload))
        .await?;

    Ok(Json(to_booking_dto(booking)))
}
