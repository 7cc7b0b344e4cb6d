use smartfridge::{
    model::shopping_list::SaveGroceryRequest,
    server::controller::shopping_list::{
        add_grocery, create_shopping_list, delete_grocery, get_categories, get_groceries,
        purchase_grocery,
    },
};

use super::*;

/// Expect the same list ID twice and 204 while the list is empty
#[tokio::test]
async fn create_returns_existing_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let first = create_shopping_list(State(app_state(&test)), headers.clone(), Path(refrigerator.id))
        .await
        .into_response();
    let second = create_shopping_list(State(app_state(&test)), headers.clone(), Path(refrigerator.id))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    let first_id = json_body(first).await;
    let second_id = json_body(second).await;
    assert_eq!(first_id, second_id);

    let items = get_groceries(
        State(app_state(&test)),
        headers,
        Path(first_id.as_i64().unwrap() as i32),
    )
    .await
    .into_response();
    assert_eq!(items.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 500 when creating a list for an unknown refrigerator
#[tokio::test]
async fn create_fails_for_unknown_refrigerator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let response = create_shopping_list(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        Path(5),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect a suggestion from a USER member listed with its category
#[tokio::test]
async fn user_suggestion_is_listed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;
    let list = test
        .shopping_list()
        .insert_shopping_list(refrigerator.id)
        .await?;
    let (dairy, sub_category, _) = test.grocery().insert_mock_grocery("Milk").await?;
    let headers = bearer_headers(&test, "kari@example.com")?;

    let added = add_grocery(
        State(app_state(&test)),
        headers.clone(),
        ValidatedJson(SaveGroceryRequest {
            name: "Milk".to_string(),
            grocery_expiry_days: 7,
            description: None,
            sub_category_id: sub_category.id,
            shopping_list_id: list.id,
            quantity: 2,
        }),
    )
    .await
    .into_response();
    let categories = get_categories(State(app_state(&test)), headers, Path(list.id))
        .await
        .into_response();

    assert_eq!(added.status(), StatusCode::OK);
    let body = json_body(added).await;
    assert_eq!(body["isSuggested"], true);
    assert_eq!(categories.status(), StatusCode::OK);
    assert_eq!(json_body(categories).await[0]["id"], dairy.id);

    Ok(())
}

/// Expect `true` on the first delete and 204 on the second
#[tokio::test]
async fn delete_twice() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    let list = test
        .shopping_list()
        .insert_shopping_list(refrigerator.id)
        .await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let item = test
        .shopping_list()
        .insert_item(list.id, milk.id, 1, false)
        .await?;
    let headers = bearer_headers(&test, "ola@example.com")?;

    let first = delete_grocery(State(app_state(&test)), headers.clone(), Path(item.id))
        .await
        .into_response();
    let second = delete_grocery(State(app_state(&test)), headers, Path(item.id))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(json_body(first).await, serde_json::Value::Bool(true));
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 401 when a USER member purchases and 200 for the superuser
#[tokio::test]
async fn purchase_requires_superuser() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;
    let list = test
        .shopping_list()
        .insert_shopping_list(refrigerator.id)
        .await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    let item = test
        .shopping_list()
        .insert_item(list.id, milk.id, 2, false)
        .await?;

    let as_user = purchase_grocery(
        State(app_state(&test)),
        bearer_headers(&test, "kari@example.com")?,
        Path((item.id, unit.id)),
    )
    .await
    .into_response();
    let as_superuser = purchase_grocery(
        State(app_state(&test)),
        bearer_headers(&test, "ola@example.com")?,
        Path((item.id, unit.id)),
    )
    .await
    .into_response();

    assert_eq!(as_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(as_superuser.status(), StatusCode::OK);
    let body = json_body(as_superuser).await;
    assert_eq!(body["refrigeratorId"], refrigerator.id);
    assert_eq!(body["quantity"], 2);

    Ok(())
}
