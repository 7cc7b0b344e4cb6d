use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::refrigerator_user::Entity")]
    RefrigeratorUser,
}

impl Related<super::refrigerator_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefrigeratorUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
