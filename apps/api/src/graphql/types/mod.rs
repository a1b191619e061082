//! GraphQL type definitions for the nosh API
//!
//! This module contains the GraphQL object types that are exposed
//! through the API, including user, restaurant, category and dish types
//! plus the result payloads returned by queries and mutations.

// Re-exports for public API - some types not yet consumed externally
#![allow(unused_imports)]

mod category;
mod common;
mod dish;
mod restaurant;
mod user;

pub use category::{AllCategoriesPayload, Category, CategoryPayload};
pub use common::OperationStatus;
pub use dish::{CreateDishPayload, DeleteDishPayload, Dish, DishOption, EditDishPayload};
pub use restaurant::{
    CreateRestaurantPayload, DeleteRestaurantPayload, EditRestaurantPayload, Restaurant,
    RestaurantPayload, RestaurantsPayload, SearchRestaurantPayload,
};
pub use user::{
    CreateAccountPayload, DeleteAccountPayload, EditProfilePayload, LoginPayload, User,
    UserProfilePayload, UserRole, VerifyEmailPayload,
};
