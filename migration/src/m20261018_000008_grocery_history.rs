use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261018_000002_refrigerator::Refrigerator;

static IDX_GROCERY_HISTORY_REFRIGERATOR_DATE: &str =
    "idx-grocery_history-refrigerator_id-date_consumed";
static FK_GROCERY_HISTORY_REFRIGERATOR_ID: &str = "fk-grocery_history-refrigerator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroceryHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(GroceryHistory::Id))
                    .col(integer(GroceryHistory::RefrigeratorId))
                    .col(date(GroceryHistory::DateConsumed))
                    .col(integer(GroceryHistory::WeightInGrams))
                    .col(boolean(GroceryHistory::WasTrashed))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROCERY_HISTORY_REFRIGERATOR_ID)
                            .from(GroceryHistory::Table, GroceryHistory::RefrigeratorId)
                            .to(Refrigerator::Table, Refrigerator::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Monthly statistics query by refrigerator and date range
        manager
            .create_index(
                Index::create()
                    .name(IDX_GROCERY_HISTORY_REFRIGERATOR_DATE)
                    .table(GroceryHistory::Table)
                    .col(GroceryHistory::RefrigeratorId)
                    .col(GroceryHistory::DateConsumed)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GROCERY_HISTORY_REFRIGERATOR_DATE)
                    .table(GroceryHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GroceryHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GroceryHistory {
    Table,
    Id,
    RefrigeratorId,
    DateConsumed,
    WeightInGrams,
    WasTrashed,
}
