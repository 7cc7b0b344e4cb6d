use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{
        CategoryModel, GroceryHistoryModel, GroceryModel, RefrigeratorGroceryModel,
        SubCategoryModel, UnitModel,
    },
    TestContext,
};

impl TestContext {
    pub fn grocery<'a>(&'a self) -> GroceryFixtures<'a> {
        GroceryFixtures { setup: self }
    }
}

pub struct GroceryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> GroceryFixtures<'a> {
    pub async fn insert_category(&self, name: &str) -> Result<CategoryModel, TestError> {
        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_sub_category(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<SubCategoryModel, TestError> {
        Ok(
            entity::prelude::SubCategory::insert(entity::sub_category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                category_id: ActiveValue::Set(category_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_unit(&self, name: &str, weight: i32) -> Result<UnitModel, TestError> {
        Ok(
            entity::prelude::Unit::insert(entity::unit::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                weight: ActiveValue::Set(weight),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_grocery(
        &self,
        sub_category_id: i32,
        name: &str,
        grocery_expiry_days: i32,
    ) -> Result<GroceryModel, TestError> {
        Ok(
            entity::prelude::Grocery::insert(entity::grocery::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                grocery_expiry_days: ActiveValue::Set(grocery_expiry_days),
                sub_category_id: ActiveValue::Set(sub_category_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a catalog grocery together with a fresh category and sub-category.
    pub async fn insert_mock_grocery(
        &self,
        name: &str,
    ) -> Result<(CategoryModel, SubCategoryModel, GroceryModel), TestError> {
        let category = self.insert_category(&format!("{} category", name)).await?;
        let sub_category = self
            .insert_sub_category(category.id, &format!("{} sub-category", name))
            .await?;
        let grocery = self.insert_grocery(sub_category.id, name, 7).await?;

        Ok((category, sub_category, grocery))
    }

    pub async fn insert_refrigerator_grocery(
        &self,
        refrigerator_id: i32,
        grocery_id: i32,
        unit_id: i32,
        quantity: i32,
        physical_expire_date: NaiveDate,
    ) -> Result<RefrigeratorGroceryModel, TestError> {
        Ok(entity::prelude::RefrigeratorGrocery::insert(
            entity::refrigerator_grocery::ActiveModel {
                refrigerator_id: ActiveValue::Set(refrigerator_id),
                grocery_id: ActiveValue::Set(grocery_id),
                unit_id: ActiveValue::Set(unit_id),
                quantity: ActiveValue::Set(quantity),
                physical_expire_date: ActiveValue::Set(physical_expire_date),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_history(
        &self,
        refrigerator_id: i32,
        date_consumed: NaiveDate,
        weight_in_grams: i32,
        was_trashed: bool,
    ) -> Result<GroceryHistoryModel, TestError> {
        Ok(
            entity::prelude::GroceryHistory::insert(entity::grocery_history::ActiveModel {
                refrigerator_id: ActiveValue::Set(refrigerator_id),
                date_consumed: ActiveValue::Set(date_consumed),
                weight_in_grams: ActiveValue::Set(weight_in_grams),
                was_trashed: ActiveValue::Set(was_trashed),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
