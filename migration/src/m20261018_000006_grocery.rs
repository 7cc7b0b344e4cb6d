use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261018_000004_category::SubCategory;

static FK_GROCERY_SUB_CATEGORY_ID: &str = "fk-grocery-sub_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grocery::Table)
                    .if_not_exists()
                    .col(pk_auto(Grocery::Id))
                    .col(string_uniq(Grocery::Name))
                    .col(text_null(Grocery::Description))
                    .col(integer(Grocery::GroceryExpiryDays))
                    .col(integer(Grocery::SubCategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROCERY_SUB_CATEGORY_ID)
                            .from(Grocery::Table, Grocery::SubCategoryId)
                            .to(SubCategory::Table, SubCategory::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grocery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grocery {
    Table,
    Id,
    Name,
    Description,
    GroceryExpiryDays,
    SubCategoryId,
}
