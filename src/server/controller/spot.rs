use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        spot::{
            CreateSpotDto, CreateSpotImageDto, OwnedSpotsDto, SpotDetailsResponseDto, SpotDto,
            SpotImageDto, SpotListDto, UpdateSpotDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::spot::{
            to_spot_dto, to_spot_image_dto, CreateSpotParams, Page, SpotFilter, SpotSummary,
            UpdateSpotParams,
        },
        service::spot::SpotService,
        state::AppState,
    },
};

/// Tag for grouping spot endpoints in OpenAPI documentation
pub static SPOT_TAG: &str = "spot";

/// Query parameters for the spot listing.
///
/// Out-of-range page and size values reset to their defaults rather than
/// failing the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSpotsQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ListSpotsQuery {
    fn filter(&self) -> SpotFilter {
        SpotFilter {
            min_lat: self.min_lat,
            max_lat: self.max_lat,
            min_lng: self.min_lng,
            max_lng: self.max_lng,
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

/// List spots.
///
/// Returns a filtered, paginated page of spots, each carrying its average
/// rating and preview image. No authentication required.
///
/// # Returns
/// - `200 OK` - Page of spots with the resolved page and size
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spots",
    tag = SPOT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-10 (default: 1)"),
        ("size" = Option<u64>, Query, description = "Page size, 1-20 (default: 20)"),
        ("minLat" = Option<f64>, Query, description = "Minimum latitude, inclusive"),
        ("maxLat" = Option<f64>, Query, description = "Maximum latitude, inclusive"),
        ("minLng" = Option<f64>, Query, description = "Minimum longitude, inclusive"),
        ("maxLng" = Option<f64>, Query, description = "Maximum longitude, inclusive"),
        ("minPrice" = Option<f64>, Query, description = "Minimum price, inclusive"),
        ("maxPrice" = Option<f64>, Query, description = "Maximum price, inclusive")
    ),
    responses(
        (status = 200, description = "Page of spots", body = SpotListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_spots(
    State(state): State<AppState>,
    Query(query): Query<ListSpotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SpotService::new(&state.db);

    let page = Page::clamped(query.page, query.size);
    let spots = service.list(&query.filter(), page).await?;

    Ok(Json(spots.into_dto()))
}

/// List the authenticated user's spots.
///
/// # Returns
/// - `200 OK` - The caller's spots with rating and preview aggregates
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spots/current-user",
    tag = SPOT_TAG,
    responses(
        (status = 200, description = "The caller's spots", body = OwnedSpotsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user_spots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = SpotService::new(&state.db);
    let spots = service.owned_by(user.id).await?;

    Ok(Json(OwnedSpotsDto {
        spots: spots.into_iter().map(SpotSummary::into_dto).collect(),
    }))
}

/// Get a spot's details.
///
/// Returns the spot with its images, owner, review count, and average star
/// rating. No authentication required.
///
/// # Returns
/// - `200 OK` - Spot details
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spots/{id}",
    tag = SPOT_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    responses(
        (status = 200, description = "Spot details", body = SpotDetailsResponseDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spot_details(
    State(state): State<AppState>,
    Path(spot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SpotService::new(&state.db);

    let details = service.details(spot_id).await?;

    Ok(Json(SpotDetailsResponseDto {
        spots: details.into_dto(),
    }))
}

/// Create a spot.
///
/// The authenticated user becomes the spot's owner.
///
/// # Returns
/// - `201 Created` - The created spot
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/spots",
    tag = SPOT_TAG,
    request_body = CreateSpotDto,
    responses(
        (status = 201, description = "Spot created", body = SpotDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_spot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = SpotService::new(&state.db);
    let spot = service
        .create(CreateSpotParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(to_spot_dto(spot))))
}

/// Update a spot.
///
/// Partial update: only the fields present in the body are changed. Owner
/// only.
///
/// # Returns
/// - `200 OK` - The updated spot
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not own the spot
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/spots/{id}",
    tag = SPOT_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    request_body = UpdateSpotDto,
    responses(
        (status = 200, description = "Spot updated", body = SpotDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_spot(
    State(state): State<AppState>,
    session: Session,
    Path(spot_id): Path<i32>,
    Json(payload): Json<UpdateSpotDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = SpotService::new(&state.db);
    let spot = service
        .update(user.id, spot_id, UpdateSpotParams::from(payload))
        .await?;

    Ok(Json(to_spot_dto(spot)))
}

/// Delete a spot.
///
/// Removes the spot together with its images, reviews, review images, and
/// bookings. Owner only.
///
/// # Returns
/// - `200 OK` - `{"message": "Successfully deleted"}`
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not own the spot
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/spots/{id}",
    tag = SPOT_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    responses(
        (status = 200, description = "Spot deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_spot(
    State(state): State<AppState>,
    session: Session,
    Path(spot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = SpotService::new(&state.db);
    service.delete(user.id, spot_id).await?;

    Ok(Json(MessageDto::new("Successfully deleted")))
}

/// Attach an image to a spot.
///
/// Owner only.
///
/// # Returns
/// - `200 OK` - The created image (id, url, preview)
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not own the spot
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/spots/{id}/images",
    tag = SPOT_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    request_body = CreateSpotImageDto,
    responses(
        (status = 200, description = "Image attached", body = SpotImageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_spot_image(
    State(state): State<AppState>,
    session: Session,
    Path(spot_id): Path<i32>,
    Json(payload): Json<CreateSpotImageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = SpotService::new(&state.db);
    let image = service
        .add_image(user.id, spot_id, payload.url, payload.preview)
        .await?;

    Ok(Json(to_spot_image_dto(image)))
}

/// Delete a spot image.
///
/// Owner only. An image attached to a different spot is reported as missing.
///
/// # Returns
/// - `200 OK` - `{"message": "Successfully deleted"}`
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not own the spot
/// - `404 Not Found` - Spot or image missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/spots/{id}/images/{image_id}",
    tag = SPOT_TAG,
    params(
        ("id" = i32, Path, description = "Spot id"),
        ("image_id" = i32, Path, description = "Spot image id")
    ),
    responses(
        (status = 200, description = "Image deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Spot or image couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_spot_image(
    State(state): State<AppState>,
    session: Session,
    Path((spot_id, image_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = SpotService::new(&state.db);
    service.delete_image(user.id, spot_id, image_id).await?;

    Ok(Json(MessageDto::new("Successfully deleted")))
}
