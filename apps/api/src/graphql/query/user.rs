//! User queries for the nosh GraphQL API
//!
//! This module provides queries for user data:
//! - me: Get the currently authenticated user
//! - userProfile: Look up any user by id

use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::graphql::guards::current_user;
use crate::graphql::types::{User, UserProfilePayload};
use crate::services::AccountService;

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// Get the currently authenticated user
    ///
    /// Returns the full user profile for the authenticated user.
    /// Requires a valid access token.
    ///
    /// # Errors
    /// - Returns error if not authenticated
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let current = current_user(ctx)?;
        Ok(User::from(current.0.clone()))
    }

    /// Look up a user's public profile by id
    ///
    /// Requires authentication. A missing user is reported in the
    /// payload rather than as a GraphQL error.
    async fn user_profile(&self, ctx: &Context<'_>, user_id: Uuid) -> Result<UserProfilePayload> {
        current_user(ctx)?;

        let accounts = ctx.data::<AccountService>()?;
        let payload = match accounts.find_by_id(user_id).await {
            Ok(user) => UserProfilePayload::ok(user),
            Err(e) => UserProfilePayload::err(&e),
        };
        Ok(payload)
    }
}
