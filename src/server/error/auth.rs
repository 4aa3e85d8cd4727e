use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request hit a protected endpoint without a logged-in session.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Happens when an account is deleted while a session for it is still
    /// live. Results in a 401 Unauthorized response.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Login credential or password did not match.
    ///
    /// Results in a 401 Unauthorized response with a generic message so the
    /// response does not reveal which part was wrong.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized. Session-related failures share the
/// "Authentication required" message; login failures report invalid
/// credentials without distinguishing credential from password.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::message("Authentication required")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::message("Invalid credentials")),
            )
                .into_response(),
        }
    }
}
