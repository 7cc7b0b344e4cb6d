//! Shopping list service layer.
//!
//! Each refrigerator has at most one shopping list. Any member may add, edit and delete
//! items, items added by a `USER` member are marked as suggestions. Purchasing an item
//! moves it into the refrigerator and requires a `SUPERUSER`.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        grocery::{CategoryDto, RefrigeratorGroceryDto},
        refrigerator::Role,
        shopping_list::{EditGroceryRequest, SaveGroceryRequest, ShoppingListItemDto},
    },
    server::{
        data::{
            category::SubCategoryRepository,
            grocery::GroceryRepository,
            refrigerator::RefrigeratorRepository,
            refrigerator_grocery::RefrigeratorGroceryRepository,
            shopping_list::{ShoppingListItemRepository, ShoppingListRepository},
            unit::UnitRepository,
        },
        error::{
            grocery::GroceryError, shopping_list::ShoppingListError, validation::ValidationError,
            Error,
        },
        model::db::{ShoppingListItemModel, ShoppingListModel},
        service::{
            grocery::{catalog::grocery_dtos, default_expiry, single_dto},
            refrigerator::access::AccessGuard,
        },
    },
};

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    /// Creates a new instance of [`ShoppingListService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the ID of the refrigerator's shopping list, creating it if needed.
    ///
    /// Fails with `ShoppingListError::SaveFailure` if the refrigerator does not exist.
    pub async fn create_shopping_list(&self, refrigerator_id: i32) -> Result<i32, Error> {
        if RefrigeratorRepository::new(self.db)
            .find_by_id(refrigerator_id)
            .await?
            .is_none()
        {
            return Err(ShoppingListError::SaveFailure(format!(
                "Failed to create shopping list for refrigerator ID {}",
                refrigerator_id
            ))
            .into());
        }

        let shopping_list_repo = ShoppingListRepository::new(self.db);
        if let Some(existing) = shopping_list_repo
            .find_by_refrigerator_id(refrigerator_id)
            .await?
        {
            return Ok(existing.id);
        }

        let shopping_list = shopping_list_repo.create(refrigerator_id).await?;

        tracing::info!(
            refrigerator_id = %refrigerator_id,
            shopping_list_id = %shopping_list.id,
            "Created shopping list"
        );

        Ok(shopping_list.id)
    }

    /// Items on a shopping list, empty if there are none.
    pub async fn get_groceries(&self, shopping_list_id: i32) -> Result<Vec<ShoppingListItemDto>, Error> {
        self.find_list(self.db, shopping_list_id).await?;

        let items = ShoppingListItemRepository::new(self.db)
            .find_by_shopping_list_id(shopping_list_id)
            .await?;

        item_dtos(self.db, items).await
    }

    /// Items on a shopping list whose grocery belongs to the sub-category.
    pub async fn get_groceries_by_sub_category(
        &self,
        shopping_list_id: i32,
        sub_category_id: i32,
    ) -> Result<Vec<ShoppingListItemDto>, Error> {
        let items = self.get_groceries(shopping_list_id).await?;

        Ok(items
            .into_iter()
            .filter(|item| item.grocery.sub_category.id == sub_category_id)
            .collect())
    }

    /// Distinct categories of the groceries on a shopping list, ordered by ID.
    pub async fn get_categories(&self, shopping_list_id: i32) -> Result<Vec<CategoryDto>, Error> {
        let items = self.get_groceries(shopping_list_id).await?;

        let categories: BTreeMap<i32, CategoryDto> = items
            .into_iter()
            .map(|item| {
                let category = item.grocery.sub_category.category;
                (category.id, category)
            })
            .collect();

        Ok(categories.into_values().collect())
    }

    /// Adds a grocery to a shopping list, any member may do this.
    ///
    /// The catalog grocery is looked up by name and created if it does not exist. If the list
    /// already holds the grocery its quantity is increased instead of adding a second item.
    ///
    /// # Returns
    /// - `Ok(ShoppingListItemDto)` - Item created or updated
    /// - `Err(Error::ValidationError)` - Negative quantity or expiry days, empty name, or a
    ///   combined quantity that does not fit in an `i32`
    /// - `Err(ShoppingListError::NotFound)` - Shopping list does not exist
    /// - `Err(GroceryError::SubCategoryNotFound)` - New catalog grocery references an unknown sub-category
    /// - `Err(RefrigeratorError::Unauthorized)` - Caller is not a member
    pub async fn save_grocery(
        &self,
        request: SaveGroceryRequest,
        email: &str,
    ) -> Result<ShoppingListItemDto, Error> {
        let name = request.name.trim();

        let mut validation = ValidationError::new();
        if name.is_empty() {
            validation.add("name", "must not be empty");
        }
        validation.check_quantity("quantity", request.quantity);
        validation.check_quantity("groceryExpiryDays", request.grocery_expiry_days);
        validation.into_result()?;

        let txn = self.db.begin().await?;

        let shopping_list = self.find_list(&txn, request.shopping_list_id).await?;
        let role = AccessGuard::new(&txn)
            .role_of(shopping_list.refrigerator_id, email)
            .await?;

        let grocery_repo = GroceryRepository::new(&txn);
        let grocery = match grocery_repo.find_by_name(name).await? {
            Some(grocery) => grocery,
            None => {
                if SubCategoryRepository::new(&txn)
                    .find_by_id(request.sub_category_id)
                    .await?
                    .is_none()
                {
                    return Err(GroceryError::SubCategoryNotFound(request.sub_category_id).into());
                }

                grocery_repo
                    .create(
                        name,
                        request.description.clone(),
                        request.grocery_expiry_days,
                        request.sub_category_id,
                    )
                    .await?
            }
        };

        let item_repo = ShoppingListItemRepository::new(&txn);
        let item = match item_repo.find_by_grocery(shopping_list.id, grocery.id).await? {
            Some(existing) => {
                let Some(quantity) = existing.quantity.checked_add(request.quantity) else {
                    return Err(ValidationError::field("quantity", "total quantity is too large").into());
                };
                item_repo.update_quantity(existing, quantity).await?
            }
            None => {
                item_repo
                    .create(
                        shopping_list.id,
                        grocery.id,
                        request.quantity,
                        role == Role::User,
                    )
                    .await?
            }
        };

        let dto = single_item_dto(&txn, item).await?;

        txn.commit().await?;

        Ok(dto)
    }

    /// Sets the quantity of a shopping list item, any member may do this.
    pub async fn edit_grocery(
        &self,
        request: EditGroceryRequest,
        email: &str,
    ) -> Result<ShoppingListItemDto, Error> {
        let mut validation = ValidationError::new();
        validation.check_quantity("quantity", request.quantity);
        validation.into_result()?;

        let (item, _) = self.find_item_for_member(request.id, email).await?;

        let item = ShoppingListItemRepository::new(self.db)
            .update_quantity(item, request.quantity)
            .await?;

        single_item_dto(self.db, item).await
    }

    /// Deletes a shopping list item, any member may do this.
    ///
    /// Deleting an item that no longer exists fails with `ShoppingListError::ItemNotFound`.
    pub async fn delete_grocery(&self, item_id: i32, email: &str) -> Result<bool, Error> {
        self.find_item_for_member(item_id, email).await?;

        let result = ShoppingListItemRepository::new(self.db)
            .delete(item_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves a shopping list item into the refrigerator, requires `SUPERUSER`.
    ///
    /// The refrigerator grocery gets the item's quantity, the given unit and an expiry of today
    /// plus the catalog grocery's expiry days. The item is removed from the list.
    pub async fn purchase_grocery(
        &self,
        item_id: i32,
        unit_id: i32,
        email: &str,
    ) -> Result<RefrigeratorGroceryDto, Error> {
        let txn = self.db.begin().await?;

        let item_repo = ShoppingListItemRepository::new(&txn);
        let Some(item) = item_repo.find_by_id(item_id).await? else {
            return Err(ShoppingListError::ItemNotFound(item_id).into());
        };
        let shopping_list = self.find_list(&txn, item.shopping_list_id).await?;

        AccessGuard::new(&txn)
            .require_superuser(shopping_list.refrigerator_id, email)
            .await?;

        if UnitRepository::new(&txn).find_by_id(unit_id).await?.is_none() {
            return Err(GroceryError::UnitNotFound(unit_id).into());
        }
        let Some(grocery) = GroceryRepository::new(&txn).find_by_id(item.grocery_id).await? else {
            return Err(GroceryError::CatalogGroceryNotFound(item.grocery_id).into());
        };

        let refrigerator_grocery = RefrigeratorGroceryRepository::new(&txn)
            .create(
                shopping_list.refrigerator_id,
                grocery.id,
                unit_id,
                item.quantity,
                default_expiry(&grocery, Utc::now().date_naive())?,
            )
            .await?;
        item_repo.delete(item.id).await?;

        txn.commit().await?;

        tracing::info!(
            refrigerator_id = %shopping_list.refrigerator_id,
            grocery_id = %grocery.id,
            "Purchased shopping list item"
        );

        single_dto(self.db, refrigerator_grocery).await
    }

    async fn find_list<C: ConnectionTrait>(
        &self,
        db: &C,
        shopping_list_id: i32,
    ) -> Result<ShoppingListModel, Error> {
        ShoppingListRepository::new(db)
            .find_by_id(shopping_list_id)
            .await?
            .ok_or_else(|| ShoppingListError::NotFound(shopping_list_id).into())
    }

    /// The item and its list, after checking the caller is a member of the list's refrigerator.
    async fn find_item_for_member(
        &self,
        item_id: i32,
        email: &str,
    ) -> Result<(ShoppingListItemModel, ShoppingListModel), Error> {
        let Some(item) = ShoppingListItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
        else {
            return Err(ShoppingListError::ItemNotFound(item_id).into());
        };
        let shopping_list = self.find_list(self.db, item.shopping_list_id).await?;

        AccessGuard::new(self.db)
            .role_of(shopping_list.refrigerator_id, email)
            .await?;

        Ok((item, shopping_list))
    }
}

async fn item_dtos<C: ConnectionTrait>(
    db: &C,
    items: Vec<ShoppingListItemModel>,
) -> Result<Vec<ShoppingListItemDto>, Error> {
    let grocery_ids: Vec<i32> = items.iter().map(|item| item.grocery_id).collect();
    let groceries = GroceryRepository::new(db).find_by_ids(grocery_ids).await?;
    let groceries: BTreeMap<i32, _> = grocery_dtos(db, groceries)
        .await?
        .into_iter()
        .map(|grocery| (grocery.id, grocery))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let grocery = groceries.get(&item.grocery_id).cloned().ok_or_else(|| {
                Error::InternalError(format!("Referenced grocery ID {} does not exist", item.grocery_id))
            })?;

            Ok(ShoppingListItemDto {
                id: item.id,
                shopping_list_id: item.shopping_list_id,
                grocery,
                quantity: item.quantity,
                is_suggested: item.is_suggested,
            })
        })
        .collect()
}

async fn single_item_dto<C: ConnectionTrait>(
    db: &C,
    item: ShoppingListItemModel,
) -> Result<ShoppingListItemDto, Error> {
    item_dtos(db, vec![item])
        .await?
        .pop()
        .ok_or_else(|| Error::InternalError("Shopping list item DTO was not built".to_string()))
}
