use axum::http::{header, HeaderMap};
use cookie::{time::Duration, Cookie, SameSite};

use crate::server::{
    error::{auth::AuthError, refrigerator::RefrigeratorError, Error},
    model::app::{AppState, JwtConfig},
    service::auth::token::validate_token,
};

/// Name of the cookie carrying the bearer token for browser clients.
pub static SESSION_COOKIE: &str = "SESSION";

/// Resolves the caller's email from the request's bearer token
///
/// The token is read from the `Authorization: Bearer` header first, then from the
/// `SESSION` cookie.
///
/// # Returns
/// - `Ok(String)`: Email from the token's subject claim
/// - `Err(AuthError::MissingToken)`: Neither the header nor the cookie is present
/// - `Err(AuthError::InvalidToken)`: The token is malformed, badly signed or expired
pub fn get_user_email(state: &AppState, headers: &HeaderMap) -> Result<String, Error> {
    let Some(token) = bearer_token(headers).or_else(|| session_token(headers)) else {
        return Err(AuthError::MissingToken.into());
    };

    let claims = validate_token(&state.jwt, &token)?;

    Ok(claims.sub)
}

/// Checks that a username taken from the path is the authenticated caller.
pub fn ensure_caller(email: &str, username: &str) -> Result<(), Error> {
    if email != username {
        tracing::debug!(
            email = %email,
            username = %username,
            "Path username does not match token subject"
        );

        return Err(RefrigeratorError::Unauthorized.into());
    }

    Ok(())
}

/// `Set-Cookie` value storing the token in the `SESSION` cookie for the token's lifetime.
pub fn session_cookie(jwt: &JwtConfig, token: &str) -> String {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::hours(jwt.expiry_hours))
        .build()
        .to_string()
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Value of the first `SESSION` cookie across all `Cookie` headers, malformed pairs are skipped.
fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value_trimmed().to_string())
        .filter(|token| !token.is_empty())
}
