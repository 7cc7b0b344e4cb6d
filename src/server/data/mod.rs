//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table. Each one is generic over
//! [`sea_orm::ConnectionTrait`] so services can hand them either the pooled connection or
//! an open transaction.

pub mod category;
pub mod grocery;
pub mod history;
pub mod membership;
pub mod recipe;
pub mod refrigerator;
pub mod refrigerator_grocery;
pub mod shopping_list;
pub mod unit;
pub mod user;
