//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint together with its utoipa specification and serves
//! the generated document through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers are grouped by tag:
/// - `auth` - registration and login under `/api/auth`
/// - `refrigerator` - refrigerators and memberships under `/api/refrigerator`
/// - `grocery` - refrigerator groceries and the catalog under `/api/refrigerator/groceries`
///   and `/api/groceries`
/// - `statistic` - monthly consumption statistics under `/api/stats`
/// - `shopping-list` - shopping lists under `/api/shopping-list`
/// - `recipe` - recipes and refrigerator suggestions under `/api/recipes`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, jwt };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Smartfridge", description = "Smartfridge API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and login"),
        (name = controller::refrigerator::REFRIGERATOR_TAG, description = "Refrigerators and their members"),
        (name = controller::grocery::GROCERY_TAG, description = "Refrigerator groceries and the grocery catalog"),
        (name = controller::statistic::STATISTIC_TAG, description = "Food waste statistics"),
        (name = controller::shopping_list::SHOPPING_LIST_TAG, description = "Shopping lists"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipes and suggestions"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::authenticate))
        .routes(routes!(controller::refrigerator::new_refrigerator))
        .routes(routes!(controller::refrigerator::add_member))
        .routes(routes!(controller::refrigerator::edit_role))
        .routes(routes!(controller::refrigerator::remove_member))
        .routes(routes!(controller::refrigerator::delete_refrigerator))
        .routes(routes!(controller::refrigerator::get_refrigerator))
        .routes(routes!(controller::refrigerator::get_user_refrigerators))
        .routes(routes!(controller::grocery::get_refrigerator_groceries))
        .routes(routes!(controller::grocery::add_groceries))
        .routes(routes!(controller::grocery::edit_grocery))
        .routes(routes!(controller::grocery::remove_grocery))
        .routes(routes!(controller::grocery::eat_grocery))
        .routes(routes!(controller::grocery::trash_grocery))
        .routes(routes!(controller::grocery::get_all_groceries))
        .routes(routes!(controller::grocery::get_categories))
        .routes(routes!(controller::grocery::get_sub_categories))
        .routes(routes!(controller::grocery::get_units))
        .routes(routes!(controller::statistic::get_statistics))
        .routes(routes!(controller::shopping_list::create_shopping_list))
        .routes(routes!(controller::shopping_list::get_groceries))
        .routes(routes!(controller::shopping_list::get_groceries_by_sub_category))
        .routes(routes!(controller::shopping_list::get_categories))
        .routes(routes!(controller::shopping_list::add_grocery))
        .routes(routes!(controller::shopping_list::edit_grocery))
        .routes(routes!(controller::shopping_list::delete_grocery))
        .routes(routes!(controller::shopping_list::purchase_grocery))
        .routes(routes!(controller::recipe::add_recipe))
        .routes(routes!(controller::recipe::get_refrigerator_recipes))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
