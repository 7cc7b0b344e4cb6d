use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::RefrigeratorRole;

/// Membership of a user in a refrigerator.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "refrigerator_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub refrigerator_id: i32,
    pub role: RefrigeratorRole,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    AppUser,
    #[sea_orm(
        belongs_to = "super::refrigerator::Entity",
        from = "Column::RefrigeratorId",
        to = "super::refrigerator::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Refrigerator,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
}

impl Related<super::refrigerator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Refrigerator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
