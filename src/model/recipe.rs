use serde::{Deserialize, Serialize};

use crate::model::grocery::GroceryDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub name: String,
    pub url: Option<String>,
    /// Catalog grocery IDs used by the recipe, duplicates are stored once
    pub grocery_ids: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: i32,
    pub name: String,
    pub url: Option<String>,
    pub groceries: Vec<GroceryDto>,
}

/// A recipe together with the ingredients a refrigerator already holds
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestionDto {
    pub recipe: RecipeDto,
    /// IDs of the recipe's groceries present in the refrigerator
    pub available_grocery_ids: Vec<i32>,
}
