//! Server application models and type definitions.
//!
//! Holds the application state shared with every handler and the database model type
//! aliases used across repositories and services.

pub mod app;
pub mod db;
