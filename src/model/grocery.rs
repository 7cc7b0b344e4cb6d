use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryDto {
    pub id: i32,
    pub name: String,
    pub category: CategoryDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitDto {
    pub id: i32,
    pub name: String,
    /// Grams per unit
    pub weight: i32,
}

/// Catalog grocery
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroceryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub grocery_expiry_days: i32,
    pub sub_category: SubCategoryDto,
}

/// A grocery stored in a refrigerator
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefrigeratorGroceryDto {
    pub id: i32,
    pub refrigerator_id: i32,
    pub grocery: GroceryDto,
    pub unit: UnitDto,
    pub quantity: i32,
    pub physical_expire_date: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGroceryDto {
    pub grocery_id: i32,
    pub unit_id: i32,
    pub quantity: i32,
    /// Defaults to today plus the catalog grocery's expiry days
    pub physical_expire_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveRefrigeratorGroceriesRequest {
    pub refrigerator_id: i32,
    pub groceries: Vec<NewGroceryDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditRefrigeratorGroceryRequest {
    pub id: i32,
    pub unit_id: i32,
    pub quantity: i32,
    pub physical_expire_date: NaiveDate,
}
