use sea_orm_migration::{prelude::*, schema::*};

static FK_SUB_CATEGORY_CATEGORY_ID: &str = "fk-sub_category-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string_uniq(Category::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(SubCategory::Id))
                    .col(string(SubCategory::Name))
                    .col(integer(SubCategory::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUB_CATEGORY_CATEGORY_ID)
                            .from(SubCategory::Table, SubCategory::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubCategory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum SubCategory {
    Table,
    Id,
    Name,
    CategoryId,
}
