//! HTTP route handlers for the nosh API
//!
//! This module contains the non-GraphQL endpoint handlers:
//! - Health check and status endpoints

pub mod health;

pub use health::{health_router, HealthState};
