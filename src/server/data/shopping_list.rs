use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{ShoppingListItemModel, ShoppingListModel};

pub struct ShoppingListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShoppingListRepository<'a, C> {
    /// Creates a new instance of [`ShoppingListRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, refrigerator_id: i32) -> Result<ShoppingListModel, DbErr> {
        let shopping_list = entity::shopping_list::ActiveModel {
            refrigerator_id: ActiveValue::Set(refrigerator_id),
            ..Default::default()
        };

        shopping_list.insert(self.db).await
    }

    pub async fn find_by_id(&self, shopping_list_id: i32) -> Result<Option<ShoppingListModel>, DbErr> {
        entity::prelude::ShoppingList::find_by_id(shopping_list_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_refrigerator_id(
        &self,
        refrigerator_id: i32,
    ) -> Result<Option<ShoppingListModel>, DbErr> {
        entity::prelude::ShoppingList::find()
            .filter(entity::shopping_list::Column::RefrigeratorId.eq(refrigerator_id))
            .one(self.db)
            .await
    }

    /// Deletes the shopping lists of a refrigerator together with their items
    pub async fn delete_by_refrigerator_id(&self, refrigerator_id: i32) -> Result<DeleteResult, DbErr> {
        let list_ids: Vec<i32> = entity::prelude::ShoppingList::find()
            .filter(entity::shopping_list::Column::RefrigeratorId.eq(refrigerator_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|list| list.id)
            .collect();

        entity::prelude::GroceryShoppingList::delete_many()
            .filter(entity::grocery_shopping_list::Column::ShoppingListId.is_in(list_ids))
            .exec(self.db)
            .await?;

        entity::prelude::ShoppingList::delete_many()
            .filter(entity::shopping_list::Column::RefrigeratorId.eq(refrigerator_id))
            .exec(self.db)
            .await
    }
}

pub struct ShoppingListItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShoppingListItemRepository<'a, C> {
    /// Creates a new instance of [`ShoppingListItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        shopping_list_id: i32,
        grocery_id: i32,
        quantity: i32,
        is_suggested: bool,
    ) -> Result<ShoppingListItemModel, DbErr> {
        let item = entity::grocery_shopping_list::ActiveModel {
            shopping_list_id: ActiveValue::Set(shopping_list_id),
            grocery_id: ActiveValue::Set(grocery_id),
            quantity: ActiveValue::Set(quantity),
            is_suggested: ActiveValue::Set(is_suggested),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn find_by_id(&self, item_id: i32) -> Result<Option<ShoppingListItemModel>, DbErr> {
        entity::prelude::GroceryShoppingList::find_by_id(item_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_shopping_list_id(
        &self,
        shopping_list_id: i32,
    ) -> Result<Vec<ShoppingListItemModel>, DbErr> {
        entity::prelude::GroceryShoppingList::find()
            .filter(entity::grocery_shopping_list::Column::ShoppingListId.eq(shopping_list_id))
            .order_by_asc(entity::grocery_shopping_list::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the item for a catalog grocery on a list, a list holds at most one per grocery
    pub async fn find_by_grocery(
        &self,
        shopping_list_id: i32,
        grocery_id: i32,
    ) -> Result<Option<ShoppingListItemModel>, DbErr> {
        entity::prelude::GroceryShoppingList::find()
            .filter(entity::grocery_shopping_list::Column::ShoppingListId.eq(shopping_list_id))
            .filter(entity::grocery_shopping_list::Column::GroceryId.eq(grocery_id))
            .one(self.db)
            .await
    }

    pub async fn update_quantity(
        &self,
        item: ShoppingListItemModel,
        quantity: i32,
    ) -> Result<ShoppingListItemModel, DbErr> {
        let mut item_am = item.into_active_model();
        item_am.quantity = ActiveValue::Set(quantity);

        item_am.update(self.db).await
    }

    /// Deletes an item
    ///
    /// Returns OK regardless of the item existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, item_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::GroceryShoppingList::delete_by_id(item_id)
            .exec(self.db)
            .await
    }
}
