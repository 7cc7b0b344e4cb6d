use sea_orm::entity::prelude::*;

/// Catalog entry shared across refrigerators.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "grocery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub grocery_expiry_days: i32,
    pub sub_category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sub_category::Entity",
        from = "Column::SubCategoryId",
        to = "super::sub_category::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    SubCategory,
    #[sea_orm(has_many = "super::refrigerator_grocery::Entity")]
    RefrigeratorGrocery,
    #[sea_orm(has_many = "super::grocery_shopping_list::Entity")]
    GroceryShoppingList,
    #[sea_orm(has_many = "super::recipe_grocery::Entity")]
    RecipeGrocery,
}

impl Related<super::sub_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategory.def()
    }
}

impl Related<super::refrigerator_grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RefrigeratorGrocery.def()
    }
}

impl Related<super::grocery_shopping_list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroceryShoppingList.def()
    }
}

impl Related<super::recipe_grocery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeGrocery.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
