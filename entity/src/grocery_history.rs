use sea_orm::entity::prelude::*;

/// Record of a grocery being eaten or thrown away.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "grocery_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub refrigerator_id: i32,
    pub date_consumed: Date,
    pub weight_in_grams: i32,
    pub was_trashed: bool,
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
}

impl Related<super::refrigerator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Refrigerator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
