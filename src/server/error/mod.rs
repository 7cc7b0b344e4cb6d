//! Error types for the smartfridge server.
//!
//! Each domain (authentication, configuration, refrigerators, groceries, shopping lists,
//! request validation) has its own `thiserror` enum with an `IntoResponse` implementation.
//! They are aggregated into [`Error`] so services and handlers can propagate any of them
//! with `?`.

pub mod auth;
pub mod config;
pub mod grocery;
pub mod refrigerator;
pub mod shopping_list;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, grocery::GroceryError,
        refrigerator::RefrigeratorError, shopping_list::ShoppingListError,
        validation::ValidationError,
    },
};

/// Main error type for the smartfridge server.
///
/// Domain errors carry their own HTTP mapping, everything else becomes a logged 500
/// response with a generic body.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing or invalid token, bad credentials, duplicate email).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Refrigerator, membership or access error.
    #[error(transparent)]
    RefrigeratorError(#[from] RefrigeratorError),
    /// Refrigerator grocery or catalog error.
    #[error(transparent)]
    GroceryError(#[from] GroceryError),
    /// Shopping list error.
    #[error(transparent)]
    ShoppingListError(#[from] ShoppingListError),
    /// Request failed field validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error such as a date calculation that left the supported range.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token signing error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RefrigeratorError(err) => err.into_response(),
            Self::GroceryError(err) => err.into_response(),
            Self::ShoppingListError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Empty `204 No Content` used for lookups that found nothing.
pub(crate) fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
