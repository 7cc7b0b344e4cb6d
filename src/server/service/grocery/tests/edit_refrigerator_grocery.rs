use crate::{
    model::grocery::EditRefrigeratorGroceryRequest, server::service::grocery::GroceryService,
};

use super::*;

/// Expect the new quantity, unit and expiry to be stored
#[tokio::test]
async fn superuser_edits_grocery() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let liter = test.grocery().insert_unit("Liter", 1000).await?;
    let deciliter = test.grocery().insert_unit("Deciliter", 100).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, liter.id, 1, date(2026, 10, 20))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .edit_refrigerator_grocery(
            EditRefrigeratorGroceryRequest {
                id: stored.id,
                unit_id: deciliter.id,
                quantity: 5,
                physical_expire_date: date(2026, 10, 25),
            },
            "ola@example.com",
        )
        .await.unwrap();

    assert_eq!(result.quantity, 5);
    assert_eq!(result.unit.id, deciliter.id);
    assert_eq!(result.physical_expire_date, date(2026, 10, 25));

    Ok(())
}

/// Expect NotFound for an unknown refrigerator grocery
#[tokio::test]
async fn fails_for_unknown_grocery() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    shared_refrigerator(&test).await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .edit_refrigerator_grocery(
            EditRefrigeratorGroceryRequest {
                id: 99,
                unit_id: unit.id,
                quantity: 1,
                physical_expire_date: date(2026, 10, 25),
            },
            "ola@example.com",
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::GroceryError(GroceryError::NotFound(99)))
    ));

    Ok(())
}

/// Expect Unauthorized when a USER member removes a grocery
#[tokio::test]
async fn user_role_cannot_remove_grocery() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 1, date(2026, 10, 20))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .remove_refrigerator_grocery(stored.id, "kari@example.com")
        .await;

    assert!(matches!(
        result,
        Err(Error::RefrigeratorError(RefrigeratorError::Unauthorized))
    ));

    let result = grocery_service
        .remove_refrigerator_grocery(stored.id, "ola@example.com")
        .await;

    assert!(result.is_ok());

    Ok(())
}
