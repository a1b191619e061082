//! Test fixtures for API integration tests
//!
//! Provides reusable factories for users, restaurants and dishes.

#![allow(dead_code)]

use sqlx::PgPool;
use uuid::Uuid;

use nosh_api::models::dish::Dish;
use nosh_api::models::restaurant::Restaurant;
use nosh_api::models::user::{User, UserRole};

use super::helpers::{create_account_service, create_restaurant_service, unique_email};

/// Password used for every fixture user
pub const TEST_PASSWORD: &str = "test_password_123";

/// Create a user with the given role through the account service
pub async fn create_user(pool: &PgPool, role: UserRole) -> User {
    let accounts = create_account_service(pool.clone());
    let email = unique_email();
    accounts
        .create_account(&email, TEST_PASSWORD, role)
        .await
        .unwrap()
}

/// Create an owner user
pub async fn create_owner(pool: &PgPool) -> User {
    create_user(pool, UserRole::Owner).await
}

/// Create a client user
pub async fn create_client(pool: &PgPool) -> User {
    create_user(pool, UserRole::Client).await
}

/// Create a restaurant owned by the given user
///
/// The category is created on demand from `category_name`.
pub async fn create_restaurant(
    pool: &PgPool,
    owner_id: Uuid,
    name: &str,
    category_name: &str,
) -> Restaurant {
    let service = create_restaurant_service(pool.clone());
    service
        .create_restaurant(
            owner_id,
            name,
            "https://example.com/cover.jpg",
            "123 Test Street",
            category_name,
        )
        .await
        .unwrap()
}

/// Create a dish on the given restaurant
pub async fn create_dish(
    pool: &PgPool,
    owner_id: Uuid,
    restaurant_id: Uuid,
    name: &str,
    price: i32,
) -> Dish {
    let service = create_restaurant_service(pool.clone());
    service
        .create_dish(
            owner_id,
            restaurant_id,
            name,
            price,
            None,
            "A very tasty test dish",
            &[],
        )
        .await
        .unwrap()
}

/// Unique category name so category assertions are isolated per test
pub fn unique_category_name() -> String {
    format!("Test Cuisine {}", Uuid::new_v4().simple())
}

/// Unique token to embed in restaurant names for search assertions
pub fn unique_search_token() -> String {
    format!("tok{}", Uuid::new_v4().simple())
}
