use serde::{Deserialize, Serialize};

use crate::model::grocery::GroceryDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItemDto {
    pub id: i32,
    pub shopping_list_id: i32,
    pub grocery: GroceryDto,
    pub quantity: i32,
    pub is_suggested: bool,
}

/// Adds a grocery to a shopping list, creating the catalog grocery when no grocery has this name
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveGroceryRequest {
    pub name: String,
    pub grocery_expiry_days: i32,
    pub description: Option<String>,
    pub sub_category_id: i32,
    pub shopping_list_id: i32,
    pub quantity: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditGroceryRequest {
    pub id: i32,
    pub quantity: i32,
}
