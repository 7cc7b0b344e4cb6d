use axum::http::header;
use smartfridge::{
    model::auth::{AuthenticationRequest, RegisterRequest},
    server::controller::auth::{authenticate, register},
};

use super::*;

fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        name: "Ola".to_string(),
        password: password.to_string(),
    }
}

/// Expect 200 with a token and the SESSION cookie set
#[tokio::test]
async fn register_sets_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;

    let response = register(
        State(app_state(&test)),
        ValidatedJson(register_request("ola@example.com", "correct horse")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("SESSION="));
    let body = json_body(response).await;
    assert!(!body["token"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn register_fails_for_existing_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let response = register(
        State(app_state(&test)),
        ValidatedJson(register_request("ola@example.com", "correct horse")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 with the failing field for a short password
#[tokio::test]
async fn register_fails_for_short_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;

    let response = register(
        State(app_state(&test)),
        ValidatedJson(register_request("ola@example.com", "short")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.get("password").is_some());

    Ok(())
}

/// Expect 200 for valid credentials
#[tokio::test]
async fn authenticate_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    test.user()
        .insert_user_with_password("ola@example.com", "correct horse")
        .await?;

    let response = authenticate(
        State(app_state(&test)),
        ValidatedJson(AuthenticationRequest {
            email: "ola@example.com".to_string(),
            password: "correct horse".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));

    Ok(())
}

/// Expect 401 for a wrong password and for an unknown email
#[tokio::test]
async fn authenticate_fails_for_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    test.user()
        .insert_user_with_password("ola@example.com", "correct horse")
        .await?;

    for (email, password) in [
        ("ola@example.com", "battery staple"),
        ("kari@example.com", "correct horse"),
    ] {
        let response = authenticate(
            State(app_state(&test)),
            ValidatedJson(AuthenticationRequest {
                email: email.to_string(),
                password: password.to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    Ok(())
}
