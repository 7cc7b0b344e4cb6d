use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::RefrigeratorRole;
use serde::{Deserialize, Serialize};

/// Role of a member within a single refrigerator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Superuser,
}

impl From<RefrigeratorRole> for Role {
    fn from(role: RefrigeratorRole) -> Self {
        match role {
            RefrigeratorRole::User => Role::User,
            RefrigeratorRole::Superuser => Role::Superuser,
        }
    }
}

impl From<Role> for RefrigeratorRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RefrigeratorRole::User,
            Role::Superuser => RefrigeratorRole::Superuser,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RefrigeratorRequest {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefrigeratorSummaryDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefrigeratorDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub members: Vec<MemberDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub refrigerator_id: i32,
    /// Email of the member
    pub username: String,
    pub name: String,
    pub role: Role,
}

/// Adds a member or changes the role of an existing member
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    pub refrigerator_id: i32,
    /// Email of the member being added or changed
    pub user_name: String,
    pub role: Role,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveMemberRequest {
    pub refrigerator_id: i32,
    /// Email of the member being removed
    pub user_name: String,
}
