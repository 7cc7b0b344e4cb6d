use crate::{
    model::refrigerator::{RefrigeratorRequest, Role},
    server::service::refrigerator::{access::AccessGuard, RefrigeratorService},
};

use super::*;

fn request(name: &str) -> RefrigeratorRequest {
    RefrigeratorRequest {
        name: name.to_string(),
        address: Some("Storgata 1".to_string()),
    }
}

/// Expect the creator to become SUPERUSER of the new refrigerator
#[tokio::test]
async fn creator_becomes_superuser() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let refrigerator_service = RefrigeratorService::new(&test.db);
    let result = refrigerator_service
        .create(request("Kitchen"), "ola@example.com")
        .await;

    assert!(result.is_ok());
    let refrigerator = result.unwrap();
    assert_eq!(refrigerator.name, "Kitchen");
    let role = AccessGuard::new(&test.db)
        .role_of(refrigerator.id, "ola@example.com")
        .await
        .unwrap();
    assert_eq!(role, Role::Superuser);

    Ok(())
}

/// Expect a ValidationError for a blank name
#[tokio::test]
async fn fails_for_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fridge_tables()
        .with_user("ola@example.com")
        .build()
        .await?;

    let refrigerator_service = RefrigeratorService::new(&test.db);
    let result = refrigerator_service
        .create(request("   "), "ola@example.com")
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Expect UserNotFound when the creator is not registered
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fridge_tables().build().await?;

    let refrigerator_service = RefrigeratorService::new(&test.db);
    let result = refrigerator_service
        .create(request("Kitchen"), "ghost@example.com")
        .await;

    assert!(matches!(
        result,
        Err(Error::RefrigeratorError(RefrigeratorError::UserNotFound(_)))
    ));

    Ok(())
}
