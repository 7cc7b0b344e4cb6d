//! Server application core modules.
//!
//! Contains the HTTP routing, authentication, database access and business logic for
//! managing refrigerators, their members, groceries, shopping lists and consumption
//! statistics.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
