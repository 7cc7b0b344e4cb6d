use sea_orm::entity::prelude::*;

/// Requested grocery on a shopping list.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "grocery_shopping_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shopping_list_id: i32,
    pub grocery_id: i32,
    pub quantity: i32,
    pub is_suggested: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shopping_list::Entity",
        from = "Column::ShoppingListId",
        to = "super::shopping_list::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    ShoppingList,
    #[sea_orm(
        belongs_to = "super::grocery::Entity",
        from = "Column::GroceryId",
        to = "super::grocery::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Grocery,
}

impl Related<super::shopping_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShoppingList.def()
    }
}

impl Related<super::grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grocery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
