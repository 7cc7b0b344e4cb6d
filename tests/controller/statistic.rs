use smartfridge::server::controller::statistic::get_statistics;

use super::*;

/// Expect 401 for a registered user who is not a member
#[tokio::test]
async fn statistics_require_membership() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("kari@example.com")
        .build()
        .await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;

    let response = get_statistics(
        State(app_state(&test)),
        bearer_headers(&test, "kari@example.com")?,
        Path(refrigerator.id),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect twelve zeroed months for a refrigerator without history
#[tokio::test]
async fn statistics_for_empty_history() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;

    let response = get_statistics(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        Path(refrigerator.id),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let months = body.as_array().unwrap();
    assert_eq!(months.len(), 12);
    assert!(months
        .iter()
        .all(|month| month["foodWaste"] == 0 && month["foodEaten"] == 0));

    Ok(())
}
