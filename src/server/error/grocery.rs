use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::no_content;

#[derive(Error, Debug)]
pub enum GroceryError {
    #[error("Refrigerator grocery ID {0} not found")]
    NotFound(i32),
    #[error("Grocery ID {0} not found in catalog")]
    CatalogGroceryNotFound(i32),
    #[error("Unit ID {0} not found")]
    UnitNotFound(i32),
    #[error("Category ID {0} not found")]
    CategoryNotFound(i32),
    #[error("Sub-category ID {0} not found")]
    SubCategoryNotFound(i32),
}

impl IntoResponse for GroceryError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        no_content()
    }
}
