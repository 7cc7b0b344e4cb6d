//! Request and response types shared by the HTTP API.

pub mod api;
pub mod auth;
pub mod grocery;
pub mod recipe;
pub mod refrigerator;
pub mod shopping_list;
pub mod statistic;
