//! GraphQL schema and resolvers for the nosh API
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for users, restaurants, categories and search
//! - Mutation resolvers for accounts, restaurants and dishes
//! - Type definitions for all GraphQL objects
//! - Guards for authentication and role checks

pub mod guards;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, NoshSchema};
