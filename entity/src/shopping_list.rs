use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shopping_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub refrigerator_id: i32,
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
    #[sea_orm(has_many = "super::grocery_shopping_list::Entity")]
    GroceryShoppingList,
}

impl Related<super::refrigerator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Refrigerator.def()
    }
}

impl Related<super::grocery_shopping_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroceryShoppingList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
