mod consume;
mod edit_refrigerator_grocery;
mod get_groceries_by_refrigerator;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::RefrigeratorRole;
use smartfridge_test_utils::{model::RefrigeratorModel, prelude::*};

use crate::server::error::{grocery::GroceryError, refrigerator::RefrigeratorError, Error};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Refrigerator owned by `ola@example.com` with `kari@example.com` as USER member.
async fn shared_refrigerator(test: &TestContext) -> Result<RefrigeratorModel, TestError> {
    let (refrigerator, _, _) = test
        .refrigerator()
        .insert_refrigerator_with_superuser("ola@example.com")
        .await?;
    test.refrigerator()
        .insert_member(refrigerator.id, "kari@example.com", RefrigeratorRole::User)
        .await?;

    Ok(refrigerator)
}
