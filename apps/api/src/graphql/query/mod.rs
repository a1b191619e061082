//! GraphQL queries for the nosh API
//!
//! This module contains all query resolvers, organized by domain.

mod restaurant;
mod user;

pub use restaurant::RestaurantQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(UserQuery, RestaurantQuery);
