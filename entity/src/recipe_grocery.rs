use sea_orm::entity::prelude::*;

/// Catalog grocery used as an ingredient of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_grocery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub recipe_id: i32,
    pub grocery_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Recipe,
    #[sea_orm(
        belongs_to = "super::grocery::Entity",
        from = "Column::GroceryId",
        to = "super::grocery::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Grocery,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<super::grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grocery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
