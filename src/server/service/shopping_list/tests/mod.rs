
use entity::sea_orm_active_enums::RefrigeratorRole;
use smartfridge_test_utils::{
    model::{RefrigeratorModel, ShoppingListModel},
    prelude::*,
};

use crate::server::error::{refrigerator::RefrigeratorError, shopping_list::ShoppingListError, Error};

/// Refrigerator owned by `ola@example.com` with `kari@example.com` as USER member and a shopping list.
async fn shared_list(test: &TestContext) -> Result<(RefrigeratorModel, ShoppingListModel), TestError> {
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

    Ok((refrigerator, list))
}
