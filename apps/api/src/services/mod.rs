//! Business logic services for the nosh API
//!
//! This module contains the core business logic including:
//! - Credential handling (password hashing, JWT signing and verification)
//! - The user account lifecycle
//! - Restaurant, category, and dish management
//! - Transactional email
//! - Health checks

pub mod account;
pub mod auth;
pub mod health;
pub mod mail;
pub mod restaurant;

pub use account::AccountService;
pub use auth::{AuthConfig, AuthService};
pub use health::HealthService;
pub use mail::MailService;
pub use restaurant::RestaurantService;
