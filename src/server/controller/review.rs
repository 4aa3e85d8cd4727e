use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto, ReviewListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::{to_review_dto, CreateReviewParams, ReviewWithRelations},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// List a spot's reviews.
///
/// Each review carries its reviewer and attached images. No authentication
/// required.
///
/// # Returns
/// - `200 OK` - The spot's reviews
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spots/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    responses(
        (status = 200, description = "The spot's reviews", body = ReviewListDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spot_reviews(
    State(state): State<AppState>,
    Path(spot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);

    let reviews = service.list_for_spot(spot_id).await?;

    Ok(Json(ReviewListDto {
        reviews: reviews
            .into_iter()
            .map(ReviewWithRelations::into_dto)
            .collect(),
    }))
}

/// Review a spot.
///
/// One review per user per spot; owners cannot review their own spot.
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Bad stars or empty review text
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Duplicate review, or the caller owns the spot
/// - `404 Not Found` - No spot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/spots/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Spot id")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Duplicate review or owner review", body = ErrorDto),
        (status = 404, description = "Spot couldn't be found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_spot_review(
    State(state): State<AppState>,
    session: Session,
    Path(spot_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = ReviewService::new(&state.db);
    let review = service
        .create(CreateReviewParams::from_dto(spot_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(to_review_dto(review))))
}
