use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ShoppingListItemModel, ShoppingListModel},
    TestContext,
};

impl TestContext {
    pub fn shopping_list<'a>(&'a self) -> ShoppingListFixtures<'a> {
        ShoppingListFixtures { setup: self }
    }
}

pub struct ShoppingListFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ShoppingListFixtures<'a> {
    pub async fn insert_shopping_list(
        &self,
        refrigerator_id: i32,
    ) -> Result<ShoppingListModel, TestError> {
        Ok(
            entity::prelude::ShoppingList::insert(entity::shopping_list::ActiveModel {
                refrigerator_id: ActiveValue::Set(refrigerator_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_item(
        &self,
        shopping_list_id: i32,
        grocery_id: i32,
        quantity: i32,
        is_suggested: bool,
    ) -> Result<ShoppingListItemModel, TestError> {
        Ok(entity::prelude::GroceryShoppingList::insert(
            entity::grocery_shopping_list::ActiveModel {
                shopping_list_id: ActiveValue::Set(shopping_list_id),
                grocery_id: ActiveValue::Set(grocery_id),
                quantity: ActiveValue::Set(quantity),
                is_suggested: ActiveValue::Set(is_suggested),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
