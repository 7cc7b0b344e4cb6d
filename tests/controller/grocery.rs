use chrono::Utc;
use smartfridge::{
    model::grocery::{NewGroceryDto, SaveRefrigeratorGroceriesRequest},
    server::controller::{
        grocery::{
            add_groceries, eat_grocery, get_refrigerator_groceries, get_sub_categories, get_units,
            remove_grocery,
        },
        statistic::get_statistics,
    },
};

use super::*;

fn save_request(refrigerator_id: i32, grocery_id: i32, unit_id: i32, quantity: i32) -> SaveRefrigeratorGroceriesRequest {
    SaveRefrigeratorGroceriesRequest {
        refrigerator_id,
        groceries: vec![NewGroceryDto {
            grocery_id,
            unit_id,
            quantity,
            physical_expire_date: None,
        }],
    }
}

/// Expect 200 for a superuser adding groceries and the groceries listed afterwards
#[tokio::test]
async fn superuser_adds_groceries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let added = add_groceries(
        State(app_state(&test)),
        headers.clone(),
        ValidatedJson(save_request(refrigerator.id, milk.id, unit.id, 2)),
    )
    .await
    .into_response();
    assert_eq!(added.status(), StatusCode::OK);

    let listed = get_refrigerator_groceries(State(app_state(&test)), headers, Path(refrigerator.id))
        .await
        .into_response();

    assert_eq!(listed.status(), StatusCode::OK);
    let body = json_body(listed).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["grocery"]["name"], "Milk");
    assert_eq!(body[0]["quantity"], 2);

    Ok(())
}

/// Expect 401 for a USER member and 400 for a negative quantity
#[tokio::test]
async fn add_groceries_rejects_user_and_negative_quantity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;

    let as_user = add_groceries(
        State(app_state(&test)),
        bearer_headers(&test, "kari@example.com")?,
        ValidatedJson(save_request(refrigerator.id, milk.id, unit.id, 1)),
    )
    .await
    .into_response();
    let negative = add_groceries(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        ValidatedJson(save_request(refrigerator.id, milk.id, unit.id, -1)),
    )
    .await
    .into_response();

    assert_eq!(as_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a USER member to eat a grocery and the weight to appear in this month's statistics
#[tokio::test]
async fn eaten_grocery_counts_in_statistics() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Carton", 250).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 2, Utc::now().date_naive())
        .await?;
    let headers = bearer_headers(&test, "kari@example.com")?;

    let eaten = eat_grocery(State(app_state(&test)), headers.clone(), Path(stored.id))
        .await
        .into_response();
    let again = eat_grocery(State(app_state(&test)), headers.clone(), Path(stored.id))
        .await
        .into_response();
    let statistics = get_statistics(State(app_state(&test)), headers, Path(refrigerator.id))
        .await
        .into_response();

    assert_eq!(eaten.status(), StatusCode::OK);
    assert_eq!(again.status(), StatusCode::NO_CONTENT);
    assert_eq!(statistics.status(), StatusCode::OK);
    let body = json_body(statistics).await;
    assert_eq!(body.as_array().unwrap().len(), 12);
    assert_eq!(body[0]["foodEaten"], 500);
    assert_eq!(body[0]["foodWaste"], 0);

    Ok(())
}

/// Expect 204 when removing a grocery that does not exist
#[tokio::test]
async fn remove_unknown_grocery_is_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let response = remove_grocery(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        Path(9),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect catalog reads without a token
#[tokio::test]
async fn catalog_is_public() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (dairy, _, _) = test.grocery().insert_mock_grocery("Milk").await?;
    test.grocery().insert_unit("Liter", 1000).await?;

    let units = get_units(State(app_state(&test))).await.into_response();
    let sub_categories = get_sub_categories(State(app_state(&test)), Path(dairy.id))
        .await
        .into_response();

    assert_eq!(units.status(), StatusCode::OK);
    assert_eq!(json_body(units).await[0]["weight"], 1000);
    assert_eq!(sub_categories.status(), StatusCode::OK);
    assert_eq!(json_body(sub_categories).await.as_array().unwrap().len(), 1);

    Ok(())
}
