use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261018_000006_grocery::Grocery;

static FK_RECIPE_GROCERY_RECIPE_ID: &str = "fk-recipe_grocery-recipe_id";
static FK_RECIPE_GROCERY_GROCERY_ID: &str = "fk-recipe_grocery-grocery_id";
static IDX_RECIPE_GROCERY_RECIPE_ID_GROCERY_ID: &str = "idx-recipe_grocery-recipe_id-grocery_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(string_uniq(Recipe::Name))
                    .col(string_null(Recipe::Url))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecipeGrocery::Table)
                    .if_not_exists()
                    .col(pk_auto(RecipeGrocery::Id))
                    .col(integer(RecipeGrocery::RecipeId))
                    .col(integer(RecipeGrocery::GroceryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_GROCERY_RECIPE_ID)
                            .from(RecipeGrocery::Table, RecipeGrocery::RecipeId)
                            .to(Recipe::Table, Recipe::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RECIPE_GROCERY_GROCERY_ID)
                            .from(RecipeGrocery::Table, RecipeGrocery::GroceryId)
                            .to(Grocery::Table, Grocery::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_GROCERY_RECIPE_ID_GROCERY_ID)
                    .table(RecipeGrocery::Table)
                    .col(RecipeGrocery::RecipeId)
                    .col(RecipeGrocery::GroceryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeGrocery::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Recipe {
    Table,
    Id,
    Name,
    Url,
}

#[derive(DeriveIden)]
enum RecipeGrocery {
    Table,
    Id,
    RecipeId,
    GroceryId,
}
