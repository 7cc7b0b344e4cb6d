//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the caller
//! from a bearer token or the `SESSION` cookie, building the cookie set on login and
//! extracting JSON bodies with field-level error responses.

pub mod get_user;
pub mod json;
