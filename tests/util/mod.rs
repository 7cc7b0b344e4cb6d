//! Helpers shared by the integration tests.

use axum::{
    body::to_bytes,
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use smartfridge::server::model::app::AppState;
use smartfridge_test_utils::prelude::*;

/// Headers carrying a valid bearer token for `email`.
pub fn bearer_headers(test: &TestContext, email: &str) -> Result<HeaderMap, TestError> {
    let token = test.auth().bearer_token(email)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    Ok(headers)
}

pub fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}

/// Reads a response body as JSON.
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
