use sea_orm::entity::prelude::*;

/// Measuring unit with its weight in grams per single unit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub weight: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::refrigerator_grocery::Entity")]
    RefrigeratorGrocery,
}

impl Related<super::refrigerator_grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefrigeratorGrocery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
