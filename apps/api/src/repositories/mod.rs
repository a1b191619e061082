//! Database repository layer for nosh
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. This pattern:
//! - Reduces code duplication across services and resolvers
//! - Provides a single source of truth for database queries
//! - Makes testing easier through dependency injection
//! - Keeps SQL queries consistent across the codebase

pub mod category;
pub mod dish;
pub mod restaurant;
pub mod user;
pub mod utils;
pub mod verification;

pub use category::CategoryRepository;
pub use dish::{DishChanges, DishRepository};
pub use restaurant::{RestaurantChanges, RestaurantRepository};
pub use user::UserRepository;
pub use verification::VerificationRepository;
