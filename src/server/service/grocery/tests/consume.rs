use sea_orm::EntityTrait;

use crate::server::service::grocery::GroceryService;

use super::*;

/// Expect eating to archive quantity times unit weight and remove the grocery
#[tokio::test]
async fn eating_archives_weight() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Deciliter", 100).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 3, date(2026, 10, 20))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .eat_refrigerator_grocery(stored.id, "kari@example.com")
        .await;

    assert!(result.is_ok());
    let history = entity::prelude::GroceryHistory::find().all(&test.db).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].weight_in_grams, 300);
    assert!(!history[0].was_trashed);
    assert!(entity::prelude::RefrigeratorGrocery::find_by_id(stored.id)
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}

/// Expect trashing to archive the grocery as waste
#[tokio::test]
async fn trashing_archives_waste() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 1, date(2026, 10, 20))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    grocery_service
        .trash_refrigerator_grocery(stored.id, "ola@example.com")
        .await.unwrap();

    let history = entity::prelude::GroceryHistory::find().all(&test.db).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].weight_in_grams, 1000);
    assert!(history[0].was_trashed);

    Ok(())
}

/// Expect Unauthorized for a non-member and the grocery left in place
#[tokio::test]
async fn non_member_cannot_eat() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("outsider@example.com")
        .build()
        .await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 1, date(2026, 10, 20))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    let result = grocery_service
        .eat_refrigerator_grocery(stored.id, "outsider@example.com")
        .await;

    assert!(matches!(
        result,
        Err(Error::RefrigeratorError(RefrigeratorError::Unauthorized))
    ));
    assert!(entity::prelude::GroceryHistory::find()
        .all(&test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect NotFound when eating the same grocery twice
#[tokio::test]
async fn second_eat_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;
    let refrigerator = shared_refrigerator(&test).await?;
    let (_, _, milk) = test.grocery().insert_mock_grocery("Milk").await?;
    let unit = test.grocery().insert_unit("Liter", 1000).await?;
    let stored = test
        .grocery()
        .insert_refrigerator_grocery(refrigerator.id, milk.id, unit.id, 1, date(2026, 10, 20))
        .await?;

    let grocery_service = GroceryService::new(&test.db);
    grocery_service
        .eat_refrigerator_grocery(stored.id, "ola@example.com")
        .await.unwrap();
    let result = grocery_service
        .eat_refrigerator_grocery(stored.id, "ola@example.com")
        .await;

    assert!(matches!(
        result,
        Err(Error::GroceryError(GroceryError::NotFound(_)))
    ));

    Ok(())
}
