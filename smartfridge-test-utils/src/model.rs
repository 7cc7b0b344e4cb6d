//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main crate so fixtures and tests read the same.

pub type UserModel = entity::app_user::Model;
pub type RefrigeratorModel = entity::refrigerator::Model;
pub type MembershipModel = entity::refrigerator_user::Model;
pub type CategoryModel = entity::category::Model;
pub type SubCategoryModel = entity::sub_category::Model;
pub type UnitModel = entity::unit::Model;
pub type GroceryModel = entity::grocery::Model;
pub type RefrigeratorGroceryModel = entity::refrigerator_grocery::Model;
pub type GroceryHistoryModel = entity::grocery_history::Model;
pub type ShoppingListModel = entity::shopping_list::Model;
pub type ShoppingListItemModel = entity::grocery_shopping_list::Model;
pub type RecipeModel = entity::recipe::Model;
pub type RecipeGroceryModel = entity::recipe_grocery::Model;
