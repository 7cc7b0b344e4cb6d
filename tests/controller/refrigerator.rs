use smartfridge::{
    model::refrigerator::{MemberRequest, RefrigeratorRequest, RemoveMemberRequest, Role},
    server::controller::refrigerator::{
        add_member, delete_refrigerator, edit_role, get_refrigerator, get_user_refrigerators,
        new_refrigerator, remove_member,
    },
};

use super::*;

/// Expect 401 when no bearer token is sent
#[tokio::test]
async fn new_refrigerator_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;

    let response = new_refrigerator(
        State(app_state(&test)),
        HeaderMap::new(),
        ValidatedJson(RefrigeratorRequest {
            name: "Kitchen".to_string(),
            address: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 and the new refrigerator listed for its creator
#[tokio::test]
async fn new_refrigerator_is_listed_for_creator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let response = new_refrigerator(
        State(app_state(&test)),
        headers.clone(),
        ValidatedJson(RefrigeratorRequest {
            name: "Cabin".to_string(),
            address: Some("Storgata 1".to_string()),
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_user_refrigerators(
        State(app_state(&test)),
        headers,
        Path("ola@example.com".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Cabin");

    Ok(())
}

/// Expect 401 when the path username is not the caller
#[tokio::test]
async fn user_refrigerators_rejects_other_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let response = get_user_refrigerators(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        Path("kari@example.com".to_string()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 204 for an unknown refrigerator
#[tokio::test]
async fn get_refrigerator_unknown_is_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let response = get_refrigerator(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        Path(42),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 200 with members and then 400 when adding an unknown user
#[tokio::test]
async fn add_member_and_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("kari@example.com")
        .build()
        .await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let added = add_member(
        State(app_state(&test)),
        headers.clone(),
        ValidatedJson(MemberRequest {
            refrigerator_id: refrigerator.id,
            user_name: "kari@example.com".to_string(),
            role: Role::User,
        }),
    )
    .await
    .into_response();
    let unknown = add_member(
        State(app_state(&test)),
        headers,
        ValidatedJson(MemberRequest {
            refrigerator_id: refrigerator.id,
            user_name: "nobody@example.com".to_string(),
            role: Role::User,
        }),
    )
    .await
    .into_response();

    assert_eq!(added.status(), StatusCode::OK);
    let body = json_body(added).await;
    assert_eq!(body["username"], "kari@example.com");
    assert_eq!(body["role"], "USER");
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when a USER member tries to add members
#[tokio::test]
async fn add_member_requires_superuser() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("per@example.com")
        .build()
        .await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;

    let response = add_member(
        State(app_state(&test)),
        bearer_headers(&test, "kari@example.com")?,
        ValidatedJson(MemberRequest {
            refrigerator_id: refrigerator.id,
            user_name: "per@example.com".to_string(),
            role: Role::Superuser,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 409 when the only superuser demotes or removes themselves with other members left
#[tokio::test]
async fn last_superuser_is_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let demote = edit_role(
        State(app_state(&test)),
        headers.clone(),
        ValidatedJson(MemberRequest {
            refrigerator_id: refrigerator.id,
            user_name: "ola@example.com".to_string(),
            role: Role::User,
        }),
    )
    .await
    .into_response();
    let remove = remove_member(
        State(app_state(&test)),
        headers,
        ValidatedJson(RemoveMemberRequest {
            refrigerator_id: refrigerator.id,
            user_name: "ola@example.com".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(demote.status(), StatusCode::CONFLICT);
    assert_eq!(remove.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 when a superuser removes a USER member
#[tokio::test]
async fn remove_member_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;

    let response = remove_member(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        ValidatedJson(RemoveMemberRequest {
            refrigerator_id: refrigerator.id,
            user_name: "kari@example.com".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["statusCode"], 200);

    Ok(())
}

/// Expect 401 for a mismatched username, 200 for the owner and 400 once the refrigerator is gone
#[tokio::test]
async fn delete_refrigerator_checks_caller() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let mismatched = delete_refrigerator(
        State(app_state(&test)),
        headers.clone(),
        Path((refrigerator.id, "kari@example.com".to_string())),
    )
    .await
    .into_response();
    let deleted = delete_refrigerator(
        State(app_state(&test)),
        headers.clone(),
        Path((refrigerator.id, "ola@example.com".to_string())),
    )
    .await
    .into_response();
    let missing = delete_refrigerator(
        State(app_state(&test)),
        headers,
        Path((refrigerator.id, "ola@example.com".to_string())),
    )
    .await
    .into_response();

    assert_eq!(mismatched.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
