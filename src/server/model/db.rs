//! Database model type aliases.
//!
//! Short names for the sea-orm entity models used by repositories and services so
//! signatures don't need to spell out the `entity` crate paths.

/// Registered account, the email doubles as the token subject.
pub type UserModel = entity::app_user::Model;

pub type RefrigeratorModel = entity::refrigerator::Model;

/// Membership of a user in a refrigerator along with their role there.
pub type MembershipModel = entity::refrigerator_user::Model;

pub type CategoryModel = entity::category::Model;
pub type SubCategoryModel = entity::sub_category::Model;

/// Reference unit with its weight in grams.
pub type UnitModel = entity::unit::Model;

/// Catalog grocery shared by all refrigerators.
pub type GroceryModel = entity::grocery::Model;

/// Concrete grocery stored in a refrigerator.
pub type RefrigeratorGroceryModel = entity::refrigerator_grocery::Model;

/// Archived consumption record used for monthly statistics.
pub type GroceryHistoryModel = entity::grocery_history::Model;

pub type ShoppingListModel = entity::shopping_list::Model;
pub type ShoppingListItemModel = entity::grocery_shopping_list::Model;

/// Recipe with its ingredients stored as [`RecipeGroceryModel`] rows.
pub type RecipeModel = entity::recipe::Model;
pub type RecipeGroceryModel = entity::recipe_grocery::Model;
