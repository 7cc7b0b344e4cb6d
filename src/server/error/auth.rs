use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, no_content, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No bearer token in Authorization header or SESSION cookie")]
    MissingToken,
    #[error("Bearer token is invalid or expired: {0}")]
    InvalidToken(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User {0:?} from token subject does not exist")]
    UserNotFound(String),
    #[error("Email {0:?} is already in use")]
    EmailAlreadyInUse(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Self::UserNotFound(ref email) => {
                tracing::debug!(email = %email, "{}", self);

                no_content()
            }
            Self::EmailAlreadyInUse(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, "Email is already in use")
            }
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
