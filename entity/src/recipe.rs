use sea_orm::entity::prelude::*;

/// Recipe suggested from the groceries a refrigerator holds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_grocery::Entity")]
    RecipeGrocery,
}

impl Related<super::recipe_grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeGrocery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
