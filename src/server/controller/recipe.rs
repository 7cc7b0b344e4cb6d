use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        recipe::{RecipeDto, RecipeRequest, RecipeSuggestionDto},
    },
    server::{
        controller::util::{get_user::get_user_email, json::ValidatedJson},
        error::Error,
        model::app::AppState,
        service::recipe::RecipeService,
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// Add a recipe made from catalog groceries, any signed-in user
///
/// # Responses
/// - 200 (Success): Recipe created
/// - 204 (No Content): An ingredient is not in the catalog
/// - 400 (Bad Request): Blank or duplicate name
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    post,
    path = "/api/recipes/new",
    tag = RECIPE_TAG,
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe created", body = RecipeDto),
        (status = 204, description = "Grocery not found"),
        (status = 400, description = "Invalid recipe"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<RecipeRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_email(&state, &headers)?;

    let recipe = RecipeService::new(&state.db).add_recipe(request).await?;

    Ok((StatusCode::OK, Json(recipe)))
}

/// Recipes that use groceries stored in a refrigerator, any member
///
/// Recipes with more of their groceries in the refrigerator come first.
#[utoipa::path(
    get,
    path = "/api/recipes/refrigerator/{refrigerator_id}",
    tag = RECIPE_TAG,
    params(("refrigerator_id" = i32, Path, description = "ID of the refrigerator")),
    responses(
        (status = 200, description = "Recipe suggestions, possibly empty", body = Vec<RecipeSuggestionDto>),
        (status = 204, description = "Refrigerator or user not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_refrigerator_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(refrigerator_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let recipes = RecipeService::new(&state.db)
        .get_recipes_for_refrigerator(refrigerator_id, &email)
        .await?;

    Ok((StatusCode::OK, Json(recipes)))
}
