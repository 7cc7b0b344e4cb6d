use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        grocery::{
            CategoryDto, EditRefrigeratorGroceryRequest, GroceryDto, RefrigeratorGroceryDto,
            SaveRefrigeratorGroceriesRequest, SubCategoryDto, UnitDto,
        },
    },
    server::{
        controller::util::{get_user::get_user_email, json::ValidatedJson},
        error::Error,
        model::app::AppState,
        service::grocery::{catalog::CatalogService, GroceryService},
    },
};

pub static GROCERY_TAG: &str = "grocery";

/// Get the groceries stored in a refrigerator, any member
///
/// # Responses
/// - 200 (Success): Groceries in the refrigerator, possibly empty
/// - 204 (No Content): Unknown refrigerator or caller account
/// - 401 (Unauthorized): Caller is not a member
#[utoipa::path(
    get,
    path = "/api/refrigerator/groceries/{refrigerator_id}",
    tag = GROCERY_TAG,
    params(("refrigerator_id" = i32, Path, description = "ID of the refrigerator")),
    responses(
        (status = 200, description = "Groceries in the refrigerator", body = Vec<RefrigeratorGroceryDto>),
        (status = 204, description = "Refrigerator or user not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_refrigerator_groceries(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(refrigerator_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let groceries = GroceryService::new(&state.db)
        .get_groceries_by_refrigerator(refrigerator_id, &email)
        .await?;

    Ok((StatusCode::OK, Json(groceries)))
}

/// Add groceries to a refrigerator, requires `SUPERUSER`
///
/// # Responses
/// - 200 (Success): Groceries stored
/// - 204 (No Content): Unknown catalog grocery or unit
/// - 400 (Bad Request): Negative quantity
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
#[utoipa::path(
    post,
    path = "/api/refrigerator/groceries/new",
    tag = GROCERY_TAG,
    request_body = SaveRefrigeratorGroceriesRequest,
    responses(
        (status = 200, description = "Groceries added", body = Vec<RefrigeratorGroceryDto>),
        (status = 204, description = "Catalog grocery or unit not found"),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_groceries(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<SaveRefrigeratorGroceriesRequest>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let groceries = GroceryService::new(&state.db)
        .add_groceries(request, &email)
        .await?;

    Ok((StatusCode::OK, Json(groceries)))
}

/// Edit a refrigerator grocery's quantity, unit and expiry date, requires `SUPERUSER`
///
/// # Responses
/// - 200 (Success): Grocery updated
/// - 204 (No Content): Unknown refrigerator grocery or unit
/// - 400 (Bad Request): Negative quantity
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
#[utoipa::path(
    post,
    path = "/api/refrigerator/groceries/edit",
    tag = GROCERY_TAG,
    request_body = EditRefrigeratorGroceryRequest,
    responses(
        (status = 200, description = "Grocery updated", body = RefrigeratorGroceryDto),
        (status = 204, description = "Grocery or unit not found"),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<EditRefrigeratorGroceryRequest>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let grocery = GroceryService::new(&state.db)
        .edit_refrigerator_grocery(request, &email)
        .await?;

    Ok((StatusCode::OK, Json(grocery)))
}

/// Remove a refrigerator grocery without recording it, requires `SUPERUSER`
///
/// # Responses
/// - 200 (Success): Grocery removed
/// - 204 (No Content): Unknown refrigerator grocery
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
#[utoipa::path(
    delete,
    path = "/api/refrigerator/groceries/remove/{id}",
    tag = GROCERY_TAG,
    params(("id" = i32, Path, description = "ID of the refrigerator grocery")),
    responses(
        (status = 200, description = "Grocery removed", body = SuccessDto),
        (status = 204, description = "Grocery not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    GroceryService::new(&state.db)
        .remove_refrigerator_grocery(id, &email)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok("Grocery removed"))))
}

/// Mark a refrigerator grocery as eaten, any member
///
/// # Responses
/// - 200 (Success): Grocery recorded as eaten and removed
/// - 204 (No Content): Unknown refrigerator grocery
/// - 401 (Unauthorized): Caller is not a member
#[utoipa::path(
    post,
    path = "/api/refrigerator/groceries/eat/{id}",
    tag = GROCERY_TAG,
    params(("id" = i32, Path, description = "ID of the refrigerator grocery")),
    responses(
        (status = 200, description = "Grocery eaten", body = SuccessDto),
        (status = 204, description = "Grocery not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn eat_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    GroceryService::new(&state.db)
        .eat_refrigerator_grocery(id, &email)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok("Grocery eaten"))))
}

/// Mark a refrigerator grocery as thrown away, any member
///
/// # Responses
/// - 200 (Success): Grocery recorded as waste and removed
/// - 204 (No Content): Unknown refrigerator grocery
/// - 401 (Unauthorized): Caller is not a member
#[utoipa::path(
    post,
    path = "/api/refrigerator/groceries/trash/{id}",
    tag = GROCERY_TAG,
    params(("id" = i32, Path, description = "ID of the refrigerator grocery")),
    responses(
        (status = 200, description = "Grocery trashed", body = SuccessDto),
        (status = 204, description = "Grocery not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn trash_grocery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    GroceryService::new(&state.db)
        .trash_refrigerator_grocery(id, &email)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::ok("Grocery trashed"))))
}

/// List the grocery catalog
#[utoipa::path(
    get,
    path = "/api/groceries",
    tag = GROCERY_TAG,
    responses(
        (status = 200, description = "All catalog groceries", body = Vec<GroceryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_groceries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let groceries = CatalogService::new(&state.db).get_all_groceries().await?;

    Ok((StatusCode::OK, Json(groceries)))
}

/// List grocery categories
#[utoipa::path(
    get,
    path = "/api/groceries/categories",
    tag = GROCERY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = CatalogService::new(&state.db).get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// List the sub-categories of a category
#[utoipa::path(
    get,
    path = "/api/groceries/categories/{category_id}/sub-categories",
    tag = GROCERY_TAG,
    params(("category_id" = i32, Path, description = "ID of the category")),
    responses(
        (status = 200, description = "Sub-categories of the category", body = Vec<SubCategoryDto>),
        (status = 204, description = "Category not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sub_categories(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let sub_categories = CatalogService::new(&state.db)
        .get_sub_categories(category_id)
        .await?;

    Ok((StatusCode::OK, Json(sub_categories)))
}

/// List measurement units
#[utoipa::path(
    get,
    path = "/api/groceries/units",
    tag = GROCERY_TAG,
    responses(
        (status = 200, description = "All units", body = Vec<UnitDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_units(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let units = CatalogService::new(&state.db).get_units().await?;

    Ok((StatusCode::OK, Json(units)))
}
