//! GraphQL mutations for the nosh API
//!
//! This module contains all mutation resolvers, organized by domain.

mod account;
mod dish;
mod restaurant;

pub use account::AccountMutation;
pub use dish::DishMutation;
pub use restaurant::RestaurantMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(AccountMutation, RestaurantMutation, DishMutation);
