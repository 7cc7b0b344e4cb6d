//! Smoke tests for the assembled router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use smartfridge::server::router::routes;
use smartfridge_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{app_state, bearer_headers, json_body};

/// Expect the OpenAPI document to list the API paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let app = routes().with_state(app_state(&test));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let document = json_body(response).await;
    assert!(document["paths"].get("/api/stats/{refrigerator_id}").is_some());
    assert!(document["paths"].get("/api/auth/register").is_some());

    Ok(())
}

/// Expect public catalog routes to answer without a token
#[tokio::test]
async fn catalog_route_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let app = routes().with_state(app_state(&test));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/groceries/units")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect protected routes to answer 401 without a token
#[tokio::test]
async fn protected_route_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let app = routes().with_state(app_state(&test));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/refrigerator/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 with a field map for a body missing required fields
#[tokio::test]
async fn malformed_body_is_validation_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let headers = bearer_headers(&test, "ola@example.com")?;
    let app = routes().with_state(app_state(&test));

    let mut request = Request::builder()
        .method("POST")
        .uri("/api/refrigerator/new")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    request.headers_mut().extend(headers);

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body.is_object());
    assert!(body["name"]
        .as_str()
        .is_some_and(|message| message.contains("missing field `name`")));

    Ok(())
}

/// Expect 400 with a field map for a body that is not JSON
#[tokio::test]
async fn unparsable_body_is_validation_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let headers = bearer_headers(&test, "ola@example.com")?;
    let app = routes().with_state(app_state(&test));

    let mut request = Request::builder()
        .method("POST")
        .uri("/api/refrigerator/new")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    request.headers_mut().extend(headers);

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["body"].is_string());

    Ok(())
}
