use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthenticationRequest, AuthenticationResponse, RegisterRequest},
    },
    server::{
        controller::util::{get_user::session_cookie, json::ValidatedJson},
        error::Error,
        model::app::AppState,
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
///
/// Creates the user and returns a bearer token for them. The token is also set as the
/// `SESSION` cookie.
///
/// # Responses
/// - 200 (Success): Account created, body holds the token
/// - 400 (Bad Request): Email already in use or a field failed validation
/// - 500 (Internal Server Error): Password hashing or database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthenticationResponse),
        (status = 400, description = "Email already in use or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.jwt)
        .register(request)
        .await?;

    let cookie = session_cookie(&state.jwt, &response.token);

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(response)))
}

/// Log in with email and password
///
/// # Responses
/// - 200 (Success): Credentials valid, body holds the token which is also set as the `SESSION` cookie
/// - 401 (Unauthorized): Unknown email or wrong password
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/auth/authenticate",
    tag = AUTH_TAG,
    request_body = AuthenticationRequest,
    responses(
        (status = 200, description = "Authenticated", body = AuthenticationResponse),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AuthenticationRequest>,
) -> Result<impl IntoResponse, Error> {
    let response = AuthService::new(&state.db, &state.jwt)
        .authenticate(request)
        .await?;

    let cookie = session_cookie(&state.jwt, &response.token);

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(response)))
}
