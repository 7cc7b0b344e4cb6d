use sea_orm::entity::prelude::*;

/// Grocery physically stored in a refrigerator.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "refrigerator_grocery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub refrigerator_id: i32,
    pub grocery_id: i32,
    pub unit_id: i32,
    pub quantity: i32,
    pub physical_expire_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::refrigerator::Entity",
        from = "Column::RefrigeratorId",
        to = "super::refrigerator::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Refrigerator,
    #[sea_orm(
        belongs_to = "super::grocery::Entity",
        from = "Column::GroceryId",
        to = "super::grocery::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Grocery,
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Unit,
}

impl Related<super::refrigerator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Refrigerator.def()
    }
}

impl Related<super::grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grocery.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
