use crate::server::service::grocery::GroceryService;

use super::*;

/// Expect NotFound for an unknown refrigerator even when the caller has no account
#[tokio::test]
async fn fails_for_unknown_refrigerator() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .get_groceries_by_refrigerator(42, "nobody@example.com")
        .await;

    assert!(matches!(
        result,
        Err(Error::RefrigeratorError(RefrigeratorError::NotFound(42)))
    ));

    Ok(())
}

/// Expect Unauthorized for a registered user outside an existing refrigerator
#[tokio::test]
async fn fails_for_non_member() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("per@example.com")
        .build()
        .await?;
    let refrigerator = shared_refrigerator(&test).await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .get_groceries_by_refrigerator(refrigerator.id, "per@example.com")
        .await;

    assert!(matches!(
        result,
        Err(Error::RefrigeratorError(RefrigeratorError::Unauthorized))
    ));

    Ok(())
}

/// Expect a USER member to read the refrigerator's groceries
#[tokio::test]
async fn member_reads_groceries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    test.grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 1, date(2026, 11, 1))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .get_groceries_by_refrigerator(refrigerator.id, "kari@example.com")
        .await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].grocery.id, milk.id);

    Ok(())
}
