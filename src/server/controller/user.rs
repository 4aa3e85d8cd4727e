use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, SessionUserDto, SignupDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::SignupParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping auth and account endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Sign up.
///
/// Creates an account and logs the new user in: the user id is stored in the
/// session, and the session cookie is the auth token.
///
/// # Returns
/// - `200 OK` - `{"user": {...}}` for the new account
/// - `400 Bad Request` - One or more fields failed validation
/// - `500 Internal Server Error` - Duplicate email or username, or database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "Account created and logged in", body = SessionUserDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "User already exists, or internal error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.signup(SignupParams::from(payload)).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Json(SessionUserDto {
        user: Some(UserDto::from(user)),
    }))
}

/// Log in.
///
/// Accepts a username or email as the credential.
///
/// # Returns
/// - `200 OK` - `{"user": {...}}` for the authenticated account
/// - `401 Unauthorized` - Credentials did not match
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/session",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = SessionUserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.login(&payload.credential, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Json(SessionUserDto {
        user: Some(UserDto::from(user)),
    }))
}

/// Log out.
///
/// Clears the session; always succeeds, logged in or not.
///
/// # Returns
/// - `200 OK` - `{"user": null}`
#[utoipa::path(
    delete,
    path = "/session",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out", body = SessionUserDto)
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Json(SessionUserDto { user: None })
}

/// Get the current session user.
///
/// Returns `{"user": null}` rather than 401 when nobody is logged in, so
/// clients can probe their auth state.
///
/// # Returns
/// - `200 OK` - `{"user": {...}}` or `{"user": null}`
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/session",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current session user, or null", body = SessionUserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    use crate::server::data::user::UserRepository;

    let user = match AuthSession::new(&session).get_user_id().await? {
        Some(user_id) => UserRepository::new(&state.db).find_by_id(user_id).await?,
        None => None,
    };

    Ok(Json(SessionUserDto {
        user: user.map(UserDto::from),
    }))
}
