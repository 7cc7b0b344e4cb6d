use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthenticationRequest {
    pub email: String,
    pub password: String,
}

/// Returned by registration and login, the same token is also set as the `SESSION` cookie
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthenticationResponse {
    pub token: String,
}
