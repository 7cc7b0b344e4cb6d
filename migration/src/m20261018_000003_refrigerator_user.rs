use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261018_000001_app_user::AppUser, m20261018_000002_refrigerator::Refrigerator};

static IDX_REFRIGERATOR_USER_MEMBERSHIP: &str = "idx-refrigerator_user-user_id-refrigerator_id";
static FK_REFRIGERATOR_USER_USER_ID: &str = "fk-refrigerator_user-user_id";
static FK_REFRIGERATOR_USER_REFRIGERATOR_ID: &str = "fk-refrigerator_user-refrigerator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RefrigeratorUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RefrigeratorUser::Id))
                    .col(integer(RefrigeratorUser::UserId))
                    .col(integer(RefrigeratorUser::RefrigeratorId))
                    .col(string(RefrigeratorUser::Role))
                    .to_owned(),
            )
            .await?;

        // A user holds at most one membership per refrigerator
        manager
            .create_index(
                Index::create()
                    .name(IDX_REFRIGERATOR_USER_MEMBERSHIP)
                    .table(RefrigeratorUser::Table)
                    .col(RefrigeratorUser::UserId)
                    .col(RefrigeratorUser::RefrigeratorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REFRIGERATOR_USER_USER_ID)
                    .from_tbl(RefrigeratorUser::Table)
                    .from_col(RefrigeratorUser::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REFRIGERATOR_USER_REFRIGERATOR_ID)
                    .from_tbl(RefrigeratorUser::Table)
                    .from_col(RefrigeratorUser::RefrigeratorId)
                    .to_tbl(Refrigerator::Table)
                    .to_col(Refrigerator::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REFRIGERATOR_USER_REFRIGERATOR_ID)
                    .table(RefrigeratorUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_REFRIGERATOR_USER_USER_ID)
                    .table(RefrigeratorUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REFRIGERATOR_USER_MEMBERSHIP)
                    .table(RefrigeratorUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RefrigeratorUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RefrigeratorUser {
    Table,
    Id,
    UserId,
    RefrigeratorId,
    Role,
}
