//! Business logic services.
//!
//! Services are built per request from the shared database connection. They validate
//! input, resolve the caller's role through
//! [`AccessGuard`](crate::server::service::refrigerator::access::AccessGuard) and coordinate
//! repositories, running multi-step mutations inside one transaction.

pub mod auth;
pub mod grocery;
pub mod recipe;
pub mod refrigerator;
pub mod shopping_list;
