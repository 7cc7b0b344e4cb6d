//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments and their responses checked for
//! status codes and bodies.

mod auth;
mod grocery;
mod recipe;
mod refrigerator;
mod shopping_list;
mod statistic;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use entity::sea_orm_active_enums::RefrigeratorRole;
use smartfridge::server::controller::util::json::ValidatedJson;
use smartfridge_test_utils::prelude::*;

use crate::util::{app_state, bearer_headers, json_body};
