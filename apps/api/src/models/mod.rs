//! Database models and types for nosh
//!
//! This module contains SQLx models for:
//! - Users and authentication
//! - Email verifications
//! - Restaurants, categories, and dishes

pub mod category;
pub mod dish;
pub mod restaurant;
pub mod user;
pub mod verification;
