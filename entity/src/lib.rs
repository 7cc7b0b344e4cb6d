//! SeaORM entities for the smartfridge schema.

pub mod prelude;

pub mod app_user;
pub mod category;
pub mod grocery;
pub mod grocery_history;
pub mod grocery_shopping_list;
pub mod recipe;
pub mod recipe_grocery;
pub mod refrigerator;
pub mod refrigerator_grocery;
pub mod refrigerator_user;
pub mod sea_orm_active_enums;
pub mod shopping_list;
pub mod sub_category;
pub mod unit;
