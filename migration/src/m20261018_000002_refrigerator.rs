use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Refrigerator::Table)
                    .if_not_exists()
                    .col(pk_auto(Refrigerator::Id))
                    .col(string(Refrigerator::Name))
                    .col(string_null(Refrigerator::Address))
                    .col(timestamp(Refrigerator::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Refrigerator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Refrigerator {
    Table,
    Id,
    Name,
    Address,
    CreatedAt,
}
