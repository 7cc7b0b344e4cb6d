use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, no_content};

#[derive(Error, Debug)]
pub enum RefrigeratorError {
    #[error("Refrigerator ID {0} not found")]
    NotFound(i32),
    #[error("User {0:?} not found")]
    UserNotFound(String),
    #[error("User {email:?} is not a member of refrigerator ID {refrigerator_id}")]
    MemberNotFound { refrigerator_id: i32, email: String },
    #[error("User {email:?} is already a member of refrigerator ID {refrigerator_id}")]
    MemberAlreadyExists { refrigerator_id: i32, email: String },
    #[error("Caller lacks the role required for this operation")]
    Unauthorized,
    #[error("Refrigerator ID {0} must keep at least one superuser while it has other members")]
    LastSuperuser(i32),
    #[error("{0}")]
    SaveFailure(String),
}

impl RefrigeratorError {
    /// Response used by the member endpoints, which answer missing entities with 400.
    pub fn into_member_response(self) -> Response {
        match self {
            Self::NotFound(_) | Self::UserNotFound(_) | Self::MemberNotFound { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            err => err.into_response(),
        }
    }
}

impl IntoResponse for RefrigeratorError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) | Self::UserNotFound(_) | Self::MemberNotFound { .. } => {
                tracing::debug!("{}", self);

                no_content()
            }
            Self::MemberAlreadyExists { .. } => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Unauthorized => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::LastSuperuser(refrigerator_id) => {
                tracing::debug!(refrigerator_id = %refrigerator_id, "{}", self);

                error_response(StatusCode::CONFLICT, self.to_string())
            }
            Self::SaveFailure(ref message) => {
                tracing::error!("{}", message);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
        }
    }
}
