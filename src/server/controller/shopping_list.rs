use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    model::{
        api::ErrorDto,
        grocery::{CategoryDto, RefrigeratorGroceryDto},
        shopping_list::{EditGroceryRequest, SaveGroceryRequest, ShoppingListItemDto},
    },
    server::{
        controller::util::{get_user::get_user_email, json::ValidatedJson},
        error::{no_content, Error},
        model::app::AppState,
        service::shopping_list::ShoppingListService,
    },
};

pub static SHOPPING_LIST_TAG: &str = "shopping-list";

/// List reads answer an empty result with 204.
fn list_response<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        return no_content();
    }

    (StatusCode::OK, Json(items)).into_response()
}

/// Get or create the shopping list of a refrigerator
///
/// # Responses
/// - 200 (Success): ID of the refrigerator's shopping list
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 500 (Internal Server Error): Unknown refrigerator or the list could not be saved
#[utoipa::path(
    post,
    path = "/api/shopping-list/create/{refrigerator_id}",
    tag = SHOPPING_LIST_TAG,
    params(("refrigerator_id" = i32, Path, description = "ID of the refrigerator")),
    responses(
        (status = 200, description = "ID of the shopping list", body = i32),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Failed to create shopping list", body = ErrorDto)
    ),
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(refrigerator_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_email(&state, &headers)?;

    let shopping_list_id = ShoppingListService::new(&state.db)
        .create_shopping_list(refrigerator_id)
        .await?;

    Ok((StatusCode::OK, Json(shopping_list_id)))
}

/// Get the items on a shopping list
///
/// # Responses
/// - 200 (Success): Items on the list
/// - 204 (No Content): The list is empty or does not exist
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/shopping-list/groceries/{shopping_list_id}",
    tag = SHOPPING_LIST_TAG,
    params(("shopping_list_id" = i32, Path, description = "ID of the shopping list")),
    responses(
        (status = 200, description = "Items on the list", body = Vec<ShoppingListItemDto>),
        (status = 204, description = "List empty or not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groceries(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopping_list_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_email(&state, &headers)?;

    let items = ShoppingListService::new(&state.db)
        .get_groceries(shopping_list_id)
        .await?;

    Ok(list_response(items))
}

/// Get the items on a shopping list within one sub-category
///
/// # Responses
/// - 200 (Success): Matching items
/// - 204 (No Content): No matching items or the list does not exist
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/shopping-list/sub-category/groceries/{shopping_list_id}/{sub_category_id}",
    tag = SHOPPING_LIST_TAG,
    params(
        ("shopping_list_id" = i32, Path, description = "ID of the shopping list"),
        ("sub_category_id" = i32, Path, description = "ID of the sub-category")
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<ShoppingListItemDto>),
        (status = 204, description = "No matching items or list not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groceries_by_sub_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((shopping_list_id, sub_category_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    get_user_email(&state, &headers)?;

    let items = ShoppingListService::new(&state.db)
        .get_groceries_by_sub_category(shopping_list_id, sub_category_id)
        .await?;

    Ok(list_response(items))
}

/// Get the categories of the groceries on a shopping list
///
/// # Responses
/// - 200 (Success): Distinct categories
/// - 204 (No Content): The list is empty or does not exist
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/shopping-list/categories/{shopping_list_id}",
    tag = SHOPPING_LIST_TAG,
    params(("shopping_list_id" = i32, Path, description = "ID of the shopping list")),
    responses(
        (status = 200, description = "Categories on the list", body = Vec<CategoryDto>),
        (status = 204, description = "List empty or not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopping_list_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_email(&state, &headers)?;

    let categories = ShoppingListService::new(&state.db)
        .get_categories(shopping_list_id)
        .await?;

    Ok(list_response(categories))
}

/// Add a grocery to a shopping list, any member
///
/// Items added by a `USER` member are marked as suggestions.
///
/// # Responses
/// - 200 (Success): Item created or its quantity increased
/// - 204 (No Content): Unknown shopping list or sub-category
/// - 400 (Bad Request): Field validation failed
/// - 401 (Unauthorized): Caller is not a member
#[utoipa::path(
    post,
    path = "/api/shopping-list/add-grocery",
    tag = SHOPPING_LIST_TAG,
    request_body = SaveGroceryRequest,
    responses(
        (status = 200, description = "Item saved", body = ShoppingListItemDto),
        (status = 204, description = "Shopping list or sub-category not found"),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<SaveGroceryRequest>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let item = ShoppingListService::new(&state.db)
        .save_grocery(request, &email)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Set the quantity of a shopping list item, any member
///
/// # Responses
/// - 200 (Success): Item updated
/// - 204 (No Content): Unknown item
/// - 400 (Bad Request): Negative quantity
/// - 401 (Unauthorized): Caller is not a member
#[utoipa::path(
    post,
    path = "/api/shopping-list/edit-grocery",
    tag = SHOPPING_LIST_TAG,
    request_body = EditGroceryRequest,
    responses(
        (status = 200, description = "Item updated", body = ShoppingListItemDto),
        (status = 204, description = "Item not found"),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<EditGroceryRequest>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let item = ShoppingListService::new(&state.db)
        .edit_grocery(request, &email)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Delete a shopping list item, any member
///
/// # Responses
/// - 200 (Success): `true` once the item is deleted
/// - 204 (No Content): Unknown item
/// - 401 (Unauthorized): Caller is not a member
#[utoipa::path(
    delete,
    path = "/api/shopping-list/delete-grocery/{item_id}",
    tag = SHOPPING_LIST_TAG,
    params(("item_id" = i32, Path, description = "ID of the shopping list item")),
    responses(
        (status = 200, description = "Item deleted", body = bool),
        (status = 204, description = "Item not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let deleted = ShoppingListService::new(&state.db)
        .delete_grocery(item_id, &email)
        .await?;

    Ok((StatusCode::OK, Json(deleted)))
}

/// Move a shopping list item into the refrigerator, requires `SUPERUSER`
///
/// # Responses
/// - 200 (Success): The refrigerator grocery created from the item
/// - 204 (No Content): Unknown item or unit
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
#[utoipa::path(
    post,
    path = "/api/shopping-list/purchase/{item_id}/{unit_id}",
    tag = SHOPPING_LIST_TAG,
    params(
        ("item_id" = i32, Path, description = "ID of the shopping list item"),
        ("unit_id" = i32, Path, description = "Unit the grocery is stored in")
    ),
    responses(
        (status = 200, description = "Item purchased", body = RefrigeratorGroceryDto),
        (status = 204, description = "Item or unit not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn purchase_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((item_id, unit_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let refrigerator_grocery = ShoppingListService::new(&state.db)
        .purchase_grocery(item_id, unit_id, &email)
        .await?;

    tracing::info!(
        item_id = %item_id,
        refrigerator_grocery_id = %refrigerator_grocery.id,
        "Shopping list item purchased"
    );

    Ok((StatusCode::OK, Json(refrigerator_grocery)))
}
