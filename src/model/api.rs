use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when an operation without a resource body succeeds
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDto {
    pub message: String,
    pub status_code: u16,
}

impl SuccessDto {
    /// `200 OK` body with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 200,
        }
    }
}
