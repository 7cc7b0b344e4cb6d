use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "refrigerator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::refrigerator_user::Entity")]
    RefrigeratorUser,
    #[sea_orm(has_many = "super::refrigerator_grocery::Entity")]
    RefrigeratorGrocery,
    #[sea_orm(has_many = "super::grocery_history::Entity")]
    GroceryHistory,
    #[sea_orm(has_many = "super::shopping_list::Entity")]
    ShoppingList,
}

impl Related<super::refrigerator_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefrigeratorUser.def()
    }
}

impl Related<super::refrigerator_grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefrigeratorGrocery.def()
    }
}

impl Related<super::grocery_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroceryHistory.def()
    }
}

impl Related<super::shopping_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
