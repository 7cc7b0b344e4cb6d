use chrono::NaiveDate;
use smartfridge::{
    model::recipe::RecipeRequest,
    server::controller::recipe::{add_recipe, get_refrigerator_recipes},
};

use super::*;

/// Expect a created recipe to be suggested for a refrigerator holding one of its groceries
#[tokio::test]
async fn suggests_added_recipe() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let (_, _, oats) = test.grocery().insert_mock_grocery("Oats").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    test.grocery()
        .insert_refrigerator_grocery(
            refrigerator.id,
            milk.id,
            unit.id,
            1,
            NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
        )
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let added = add_recipe(
        State(app_state(&test)),
        headers.clone(),
        ValidatedJson(RecipeRequest {
            name: "Porridge".to_string(),
            url: None,
            grocery_ids: vec![milk.id, oats.id],
        }),
    )
    .await
    .into_response();
    assert_eq!(added.status(), StatusCode::OK);

    let suggested = get_refrigerator_recipes(State(app_state(&test)), headers, Path(refrigerator.id))
        .await
        .into_response();

    assert_eq!(suggested.status(), StatusCode::OK);
    let body = json_body(suggested).await;
    assert_eq!(body[0]["recipe"]["name"], "Porridge");
    assert_eq!(body[0]["availableGroceryIds"], serde_json::json!([milk.id]));

    Ok(())
}

/// Expect 401 for a recipe posted without a token
#[tokio::test]
async fn add_recipe_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;

    let response = add_recipe(
        State(app_state(&test)),
        HeaderMap::new(),
        ValidatedJson(RecipeRequest {
            name: "Porridge".to_string(),
            url: None,
            grocery_ids: vec![],
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
