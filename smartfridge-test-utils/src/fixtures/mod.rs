//! Fixture helpers for inserting test data.
//!
//! - `auth` - bearer tokens signed with the test secret
//! - `user` - user accounts
//! - `refrigerator` - refrigerators and memberships
//! - `grocery` - catalog, refrigerator groceries and consumption history
//! - `shopping_list` - shopping lists and their items
//! - `recipe` - recipes and their ingredients

pub mod auth;
pub mod grocery;
pub mod recipe;
pub mod refrigerator;
pub mod shopping_list;
pub mod user;
