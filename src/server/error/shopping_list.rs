use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, no_content};

#[derive(Error, Debug)]
pub enum ShoppingListError {
    #[error("Shopping list ID {0} not found")]
    NotFound(i32),
    #[error("Shopping list item ID {0} not found")]
    ItemNotFound(i32),
    #[error("{0}")]
    SaveFailure(String),
}

impl IntoResponse for ShoppingListError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) | Self::ItemNotFound(_) => {
                tracing::debug!("{}", self);

                no_content()
            }
            Self::SaveFailure(message) => {
                tracing::error!("{}", message);

                error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}
