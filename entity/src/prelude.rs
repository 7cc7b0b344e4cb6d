pub use super::app_user::Entity as AppUser;
pub use super::category::Entity as Category;
pub use super::grocery::Entity as Grocery;
pub use super::grocery_history::Entity as GroceryHistory;
pub use super::grocery_shopping_list::Entity as GroceryShoppingList;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_grocery::Entity as RecipeGrocery;
pub use super::refrigerator::Entity as Refrigerator;
pub use super::refrigerator_grocery::Entity as RefrigeratorGrocery;
pub use super::refrigerator_user::Entity as RefrigeratorUser;
pub use super::shopping_list::Entity as ShoppingList;
pub use super::sub_category::Entity as SubCategory;
pub use super::unit::Entity as Unit;
