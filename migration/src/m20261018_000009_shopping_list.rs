use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261018_000002_refrigerator::Refrigerator, m20261018_000006_grocery::Grocery};

static FK_SHOPPING_LIST_REFRIGERATOR_ID: &str = "fk-shopping_list-refrigerator_id";
static FK_GROCERY_SHOPPING_LIST_SHOPPING_LIST_ID: &str = "fk-grocery_shopping_list-shopping_list_id";
static FK_GROCERY_SHOPPING_LIST_GROCERY_ID: &str = "fk-grocery_shopping_list-grocery_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingList::Table)
                    .if_not_exists()
                    .col(pk_auto(ShoppingList::Id))
                    .col(integer_uniq(ShoppingList::RefrigeratorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOPPING_LIST_REFRIGERATOR_ID)
                            .from(ShoppingList::Table, ShoppingList::RefrigeratorId)
                            .to(Refrigerator::Table, Refrigerator::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroceryShoppingList::Table)
                    .if_not_exists()
                    .col(pk_auto(GroceryShoppingList::Id))
                    .col(integer(GroceryShoppingList::ShoppingListId))
                    .col(integer(GroceryShoppingList::GroceryId))
                    .col(integer(GroceryShoppingList::Quantity))
                    .col(boolean(GroceryShoppingList::IsSuggested))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROCERY_SHOPPING_LIST_SHOPPING_LIST_ID)
                            .from(GroceryShoppingList::Table, GroceryShoppingList::ShoppingListId)
                            .to(ShoppingList::Table, ShoppingList::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROCERY_SHOPPING_LIST_GROCERY_ID)
                            .from(GroceryShoppingList::Table, GroceryShoppingList::GroceryId)
                            .to(Grocery::Table, Grocery::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroceryShoppingList::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShoppingList::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShoppingList {
    Table,
    Id,
    RefrigeratorId,
}

#[derive(DeriveIden)]
enum GroceryShoppingList {
    Table,
    Id,
    ShoppingListId,
    GroceryId,
    Quantity,
    IsSuggested,
}
