use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::model;
use crate::server::{
    controller::{booking, review, spot, user},
    state::AppState,
};

/// OpenAPI document covering every endpoint, served through Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(
        spot::list_spots,
        spot::get_current_user_spots,
        spot::get_spot_details,
        spot::create_spot,
        spot::update_spot,
        spot::delete_spot,
        spot::add_spot_image,
        spot::delete_spot_image,
        review::get_spot_reviews,
        review::create_spot_review,
        booking::get_spot_bookings,
        booking::create_spot_booking,
        user::signup,
        user::login,
        user::logout,
        user::get_session_user,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::user::UserDto,
        model::user::SignupDto,
        model::user::LoginDto,
        model::user::SessionUserDto,
        model::spot::SpotDto,
        model::spot::SpotSummaryDto,
        model::spot::SpotListDto,
        model::spot::OwnedSpotsDto,
        model::spot::SpotDetailsDto,
        model::spot::SpotDetailsResponseDto,
        model::spot::OwnerDto,
        model::spot::SpotImageDto,
        model::spot::CreateSpotDto,
        model::spot::UpdateSpotDto,
        model::spot::CreateSpotImageDto,
        model::review::ReviewDto,
        model::review::ReviewImageDto,
        model::review::ReviewWithRelationsDto,
        model::review::ReviewListDto,
        model::review::CreateReviewDto,
        model::booking::BookingDto,
        model::booking::BookingWithGuestDto,
        model::booking::GuestBookingDto,
        model::booking::OwnerBookingListDto,
        model::booking::GuestBookingListDto,
        model::booking::CreateBookingDto,
    ))
)]
struct ApiDoc;

/// Builds the application route table.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/spots", get(spot::list_spots).post(spot::create_spot))
        .route("/spots/current-user", get(spot::get_current_user_spots))
        .route(
            "/spots/{id}",
            get(spot::get_spot_details)
                .put(spot::update_spot)
                .delete(spot::delete_spot),
        )
        .route("/spots/{id}/images", post(spot::add_spot_image))
        .route(
            "/spots/{id}/images/{image_id}",
            delete(spot::delete_spot_image),
        )
        .route(
            "/spots/{id}/reviews",
            get(review::get_spot_reviews).post(review::create_spot_review),
        )
        .route(
            "/spots/{id}/bookings",
            get(booking::get_spot_bookings).post(booking::create_spot_booking),
        )
        .route("/users", post(user::signup))
        .route(
            "/session",
            get(user::get_session_user)
                .post(user::login)
                .delete(user::logout),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
