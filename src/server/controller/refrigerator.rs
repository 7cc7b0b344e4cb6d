use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        refrigerator::{
            MemberDto, MemberRequest, RefrigeratorDto, RefrigeratorRequest,
            RefrigeratorSummaryDto, RemoveMemberRequest,
        },
    },
    server::{
        controller::util::{
            get_user::{ensure_caller, get_user_email},
            json::ValidatedJson,
        },
        error::Error,
        model::app::AppState,
        service::refrigerator::{member::MemberService, RefrigeratorService},
    },
};

pub static REFRIGERATOR_TAG: &str = "refrigerator";

/// Member endpoints answer a missing refrigerator, user or membership with 400 instead of 204.
fn member_error(err: Error) -> Response {
    match err {
        Error::RefrigeratorError(err) => err.into_member_response(),
        err => err.into_response(),
    }
}

/// Create a refrigerator owned by the caller
///
/// The caller becomes the refrigerator's first `SUPERUSER`.
///
/// # Responses
/// - 200 (Success): Refrigerator created
/// - 401 (Unauthorized): Missing or invalid bearer token
/// - 500 (Internal Server Error): Refrigerator could not be saved
#[utoipa::path(
    post,
    path = "/api/refrigerator/new",
    tag = REFRIGERATOR_TAG,
    request_body = RefrigeratorRequest,
    responses(
        (status = 200, description = "Refrigerator created", body = RefrigeratorSummaryDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Failed to save refrigerator", body = ErrorDto)
    ),
)]
pub async fn new_refrigerator(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<RefrigeratorRequest>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;

    let refrigerator = RefrigeratorService::new(&state.db)
        .create(request, &email)
        .await?;

    Ok((StatusCode::OK, Json(refrigerator)))
}

/// Add a user to a refrigerator, requires `SUPERUSER`
///
/// # Responses
/// - 200 (Success): Member added
/// - 400 (Bad Request): Unknown refrigerator or user, or the user is already a member
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
#[utoipa::path(
    post,
    path = "/api/refrigerator/members/new",
    tag = REFRIGERATOR_TAG,
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Member added", body = MemberDto),
        (status = 400, description = "Refrigerator or user not found, or already a member", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> Result<impl IntoResponse, Response> {
    let email = get_user_email(&state, &headers).map_err(IntoResponse::into_response)?;

    let member = MemberService::new(&state.db)
        .add_member(request, &email)
        .await
        .map_err(member_error)?;

    Ok((StatusCode::OK, Json(member)))
}

/// Change a member's role, requires `SUPERUSER`
///
/// # Responses
/// - 200 (Success): Role changed
/// - 400 (Bad Request): Unknown refrigerator, user or membership
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
/// - 409 (Conflict): The change would leave the refrigerator without a superuser
#[utoipa::path(
    post,
    path = "/api/refrigerator/members/edit-role",
    tag = REFRIGERATOR_TAG,
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Role changed", body = MemberDto),
        (status = 400, description = "Refrigerator, user or membership not found", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 409, description = "Last superuser cannot be demoted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<MemberRequest>,
) -> Result<impl IntoResponse, Response> {
    let email = get_user_email(&state, &headers).map_err(IntoResponse::into_response)?;

    let member = MemberService::new(&state.db)
        .set_role(request, &email)
        .await
        .map_err(member_error)?;

    Ok((StatusCode::OK, Json(member)))
}

/// Remove a member from a refrigerator
///
/// Superusers may remove anyone, other members only themselves. Removing the only member
/// deletes the refrigerator.
///
/// # Responses
/// - 200 (Success): Member removed
/// - 400 (Bad Request): Unknown refrigerator, user or membership
/// - 401 (Unauthorized): Caller may not remove this member
/// - 409 (Conflict): The removal would leave the other members without a superuser
#[utoipa::path(
    post,
    path = "/api/refrigerator/members/remove",
    tag = REFRIGERATOR_TAG,
    request_body = RemoveMemberRequest,
    responses(
        (status = 200, description = "Member removed", body = SuccessDto),
        (status = 400, description = "Refrigerator, user or membership not found", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 409, description = "Last superuser cannot be removed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<RemoveMemberRequest>,
) -> Result<impl IntoResponse, Response> {
    let email = get_user_email(&state, &headers).map_err(IntoResponse::into_response)?;

    MemberService::new(&state.db)
        .remove_member(request, &email)
        .await
        .map_err(member_error)?;

    Ok((StatusCode::OK, Json(SuccessDto::ok("Member removed"))))
}

/// Delete a refrigerator with everything stored in it, requires `SUPERUSER`
///
/// `username` must be the authenticated caller.
///
/// # Responses
/// - 200 (Success): Refrigerator deleted
/// - 400 (Bad Request): Unknown refrigerator
/// - 401 (Unauthorized): Caller is not a superuser of the refrigerator
/// - 500 (Internal Server Error): Refrigerator could not be deleted
#[utoipa::path(
    delete,
    path = "/api/refrigerator/delete/{refrigerator_id}/{username}",
    tag = REFRIGERATOR_TAG,
    params(
        ("refrigerator_id" = i32, Path, description = "ID of the refrigerator"),
        ("username" = String, Path, description = "Email of the caller")
    ),
    responses(
        (status = 200, description = "Refrigerator deleted", body = SuccessDto),
        (status = 400, description = "Refrigerator not found", body = ErrorDto),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Failed to delete refrigerator", body = ErrorDto)
    ),
)]
pub async fn delete_refrigerator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((refrigerator_id, username)): Path<(i32, String)>,
) -> Result<impl IntoResponse, Response> {
    let email = get_user_email(&state, &headers).map_err(IntoResponse::into_response)?;
    ensure_caller(&email, &username).map_err(IntoResponse::into_response)?;

    RefrigeratorService::new(&state.db)
        .force_delete(refrigerator_id, &email)
        .await
        .map_err(member_error)?;

    tracing::info!(refrigerator_id = %refrigerator_id, email = %email, "Refrigerator deleted");

    Ok((StatusCode::OK, Json(SuccessDto::ok("Refrigerator deleted"))))
}

/// Get a refrigerator with its members
///
/// # Responses
/// - 200 (Success): Refrigerator found
/// - 204 (No Content): No refrigerator has this ID
/// - 401 (Unauthorized): Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/api/refrigerator/{refrigerator_id}",
    tag = REFRIGERATOR_TAG,
    params(("refrigerator_id" = i32, Path, description = "ID of the refrigerator")),
    responses(
        (status = 200, description = "Refrigerator found", body = RefrigeratorDto),
        (status = 204, description = "Refrigerator not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_refrigerator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(refrigerator_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_email(&state, &headers)?;

    let refrigerator = RefrigeratorService::new(&state.db)
        .get_refrigerator(refrigerator_id)
        .await?;

    Ok((StatusCode::OK, Json(refrigerator)))
}

/// Get the refrigerators the caller is a member of
///
/// # Responses
/// - 200 (Success): Refrigerators of the caller, possibly empty
/// - 204 (No Content): The caller's account does not exist
/// - 401 (Unauthorized): Missing token or `username` is not the caller
#[utoipa::path(
    get,
    path = "/api/refrigerator/user/{username}",
    tag = REFRIGERATOR_TAG,
    params(("username" = String, Path, description = "Email of the caller")),
    responses(
        (status = 200, description = "Refrigerators of the user", body = Vec<RefrigeratorSummaryDto>),
        (status = 204, description = "User not found"),
        (status = 401, description = "Unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_refrigerators(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let email = get_user_email(&state, &headers)?;
    ensure_caller(&email, &username)?;

    let refrigerators = RefrigeratorService::new(&state.db)
        .get_all_by_user(&email)
        .await?;

    Ok((StatusCode::OK, Json(refrigerators)))
}
