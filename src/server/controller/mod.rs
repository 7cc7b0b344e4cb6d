//! HTTP controller endpoints for the smartfridge web API.
//!
//! Controllers resolve the caller from the bearer token, build the service for the request
//! and turn its result into a response. Errors are mapped to status codes by their
//! `IntoResponse` implementations. Every handler is annotated for utoipa so it appears in
//! the OpenAPI document.

pub mod auth;
pub mod grocery;
pub mod recipe;
pub mod refrigerator;
pub mod shopping_list;
pub mod statistic;
pub mod util;
