//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! The status mapping is part of the public contract: validation failures are
//! 400, booking conflicts and duplicate reviews are 403 (as is plain
//! Forbidden), missing resources are 404, and duplicate signup credentials
//! are 500.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Most variants use `#[from]`
/// for automatic error conversion. `AuthError` handles its own response
/// mapping; the remaining variants each map to one fixed status and body shape.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error; delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error (also covers the session store backend).
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Password hashing or verification error from bcrypt.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Socket bind or accept error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the resource-specific message,
    /// e.g. "Spot couldn't be found".
    #[error("{0}")]
    NotFound(String),

    /// Authenticated but not authorized to mutate the resource.
    ///
    /// Results in 403 Forbidden with the fixed body `{"message": "Forbidden"}`.
    #[error("Forbidden")]
    Forbidden,

    /// Malformed or out-of-policy input.
    ///
    /// Results in 400 Bad Request with a per-field error map,
    /// e.g. `{"endDate": "endDate cannot be on or before startDate"}`.
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, String>,
    },

    /// Business-rule conflict: booking overlap or duplicate review.
    ///
    /// Results in 403 with the conflict message and optional field errors.
    #[error("{message}")]
    Conflict {
        message: String,
        errors: BTreeMap<String, String>,
    },

    /// Duplicate signup credentials.
    ///
    /// Results in 500 with `{"message": "User already exists"}` and a field
    /// error naming the duplicated credential.
    #[error("User already exists")]
    UserExists { field: String, message: String },

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a validation error with a single field message and the fixed
    /// "Bad Request" envelope message.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Self::Validation {
            message: "Bad Request".to_string(),
            errors,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to its fixed HTTP status code and response body.
/// Authentication errors delegate to their own response handling. Internal
/// errors are logged with full details but return generic messages to avoid
/// information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::message(msg))).into_response()
            }
            Self::Forbidden => {
                (StatusCode::FORBIDDEN, Json(ErrorDto::message("Forbidden"))).into_response()
            }
            Self::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::with_errors(message, errors)),
            )
                .into_response(),
            Self::Conflict { message, errors } => {
                let body = if errors.is_empty() {
                    ErrorDto::message(message)
                } else {
                    ErrorDto::with_errors(message, errors)
                };
                (StatusCode::FORBIDDEN, Json(body)).into_response()
            }
            Self::UserExists { field, message } => {
                let mut errors = BTreeMap::new();
                errors.insert(field, message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::with_errors("User already exists", errors)),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::message("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server
/// Error response.
///
/// Logs the error message and returns a generic "Internal server error" body to
/// the client. Used as a fallback for errors that don't have specific HTTP
/// response mappings (database, session store, hashing, config).
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::message("Internal server error")),
        )
            .into_response()
    }
}
