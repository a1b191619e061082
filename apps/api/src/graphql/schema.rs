//! GraphQL schema builder for the nosh API
//!
//! This module provides the schema construction for the async-graphql API.

use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

use crate::repositories::{CategoryRepository, DishRepository, RestaurantRepository};
use crate::services::{AccountService, RestaurantService};

use super::mutation::Mutation;
use super::query::Query;

/// The nosh GraphQL schema type
pub type NoshSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    pool: Option<PgPool>,
    account_service: Option<AccountService>,
    restaurant_service: Option<RestaurantService>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self {
            pool: None,
            account_service: None,
            restaurant_service: None,
        }
    }

    /// Set the database pool
    ///
    /// The pool is used to construct the repositories that relationship
    /// resolvers read from.
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Set the account service
    pub fn account_service(mut self, account_service: AccountService) -> Self {
        self.account_service = Some(account_service);
        self
    }

    /// Set the restaurant service
    pub fn restaurant_service(mut self, restaurant_service: RestaurantService) -> Self {
        self.restaurant_service = Some(restaurant_service);
        self
    }

    /// Build the schema with all configured services
    ///
    /// # Panics
    /// Panics if required services (pool, account_service,
    /// restaurant_service) are not configured
    pub fn build(self) -> NoshSchema {
        let pool = self.pool.expect("database pool is required");
        let account_service = self.account_service.expect("account service is required");
        let restaurant_service = self
            .restaurant_service
            .expect("restaurant service is required");

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(RestaurantRepository::new(pool.clone()))
            .data(CategoryRepository::new(pool.clone()))
            .data(DishRepository::new(pool))
            .data(account_service)
            .data(restaurant_service)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema with the provided services
///
/// This is a convenience function for quickly creating a schema
/// with all required dependencies.
pub fn build_schema(
    pool: PgPool,
    account_service: AccountService,
    restaurant_service: RestaurantService,
) -> NoshSchema {
    SchemaBuilder::new()
        .pool(pool)
        .account_service(account_service)
        .restaurant_service(restaurant_service)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Integration tests for the schema would require a database connection
    // and are better placed in the integration test suite.

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.pool.is_none());
        assert!(builder.account_service.is_none());
        assert!(builder.restaurant_service.is_none());
    }
}
