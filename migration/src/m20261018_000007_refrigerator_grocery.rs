use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261018_000002_refrigerator::Refrigerator, m20261018_000005_unit::Unit,
    m20261018_000006_grocery::Grocery,
};

static IDX_REFRIGERATOR_GROCERY_REFRIGERATOR_ID: &str = "idx-refrigerator_grocery-refrigerator_id";
static FK_REFRIGERATOR_GROCERY_REFRIGERATOR_ID: &str = "fk-refrigerator_grocery-refrigerator_id";
static FK_REFRIGERATOR_GROCERY_GROCERY_ID: &str = "fk-refrigerator_grocery-grocery_id";
static FK_REFRIGERATOR_GROCERY_UNIT_ID: &str = "fk-refrigerator_grocery-unit_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefrigeratorGrocery::Table)
                    .if_not_exists()
                    .col(pk_auto(RefrigeratorGrocery::Id))
                    .col(integer(RefrigeratorGrocery::RefrigeratorId))
                    .col(integer(RefrigeratorGrocery::GroceryId))
                    .col(integer(RefrigeratorGrocery::UnitId))
                    .col(integer(RefrigeratorGrocery::Quantity))
                    .col(date(RefrigeratorGrocery::PhysicalExpireDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REFRIGERATOR_GROCERY_REFRIGERATOR_ID)
                            .from(RefrigeratorGrocery::Table, RefrigeratorGrocery::RefrigeratorId)
                            .to(Refrigerator::Table, Refrigerator::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REFRIGERATOR_GROCERY_GROCERY_ID)
                            .from(RefrigeratorGrocery::Table, RefrigeratorGrocery::GroceryId)
                            .to(Grocery::Table, Grocery::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REFRIGERATOR_GROCERY_UNIT_ID)
                            .from(RefrigeratorGrocery::Table, RefrigeratorGrocery::UnitId)
                            .to(Unit::Table, Unit::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REFRIGERATOR_GROCERY_REFRIGERATOR_ID)
                    .table(RefrigeratorGrocery::Table)
                    .col(RefrigeratorGrocery::RefrigeratorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REFRIGERATOR_GROCERY_REFRIGERATOR_ID)
                    .table(RefrigeratorGrocery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RefrigeratorGrocery::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RefrigeratorGrocery {
    Table,
    Id,
    RefrigeratorId,
    GroceryId,
    UnitId,
    Quantity,
    PhysicalExpireDate,
}
