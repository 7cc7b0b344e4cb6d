use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, statistic::MonthlyStatDto},
    server::{
        controller::util::get_user::get_user_email,
        error::Error,
        model::app::AppState,
        service::{grocery::history::GroceryHistoryService, refrigerator::access::AccessGuard},
    },
};

pub static STATISTIC_TAG: &str = "statistic";

/// Eaten and wasted weight per month for the last twelve months, any member
///
/// Entries start with the current month. Weights are in grams.
///
/// # Responses
/// - 200 (Success): Twelve monthly entries
/// - 204 (No Content): The caller's account does not exist
/// - 401 (Unauthorized): Caller is not a member of the refrigerator
#[utoipa::path(
    get,
    path = "/api/stats/{refrigerator_id}",
    tag = STATISTIC_TAG,
    params(("refrigerator_id" = i32, Path, description = "ID of the refrigerator")),
    responses(
        (status = 200, description = "Monthly statistics", body = Vec<MonthlyStatDto>),
        (status = 204, description = "User not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(refrigerator_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    AccessGuard::new(&state.db)
        .role_of(refrigerator_id, &email)
        .await?;

    let statistics = GroceryHistoryService::new(&state.db)
        .statistics_for_year(refrigerator_id)
        .await?;

    Ok((StatusCode::OK, Json(statistics)))
}
