//! Authorization guards for GraphQL resolvers
//!
//! The HTTP pipeline verifies the bearer token and injects a
//! [`CurrentUser`] into the request data. Resolvers call these helpers to
//! require a login or a specific role. Guard failures surface as GraphQL
//! errors rather than envelope errors because they happen before any
//! domain logic runs.

use async_graphql::{Context, Result};

use crate::models::user::{CurrentUser, UserRole};

/// Require an authenticated user
pub fn current_user<'a>(ctx: &'a Context<'_>) -> Result<&'a CurrentUser> {
    ctx.data_opt::<CurrentUser>()
        .ok_or_else(|| async_graphql::Error::new("authentication required"))
}

/// Require an authenticated user carrying the given role
pub fn require_role<'a>(ctx: &'a Context<'_>, role: UserRole) -> Result<&'a CurrentUser> {
    let user = current_user(ctx)?;
    if user.role() != role {
        return Err(async_graphql::Error::new(format!("{} role required", role)));
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Object, Request, Schema};
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::user::User;

    struct TestQuery;

    #[Object]
    impl TestQuery {
        async fn whoami(&self, ctx: &Context<'_>) -> Result<String> {
            let user = current_user(ctx)?;
            Ok(user.0.email.clone())
        }

        async fn owner_only(&self, ctx: &Context<'_>) -> Result<bool> {
            require_role(ctx, UserRole::Owner)?;
            Ok(true)
        }
    }

    fn test_schema() -> Schema<TestQuery, EmptyMutation, EmptySubscription> {
        Schema::new(TestQuery, EmptyMutation, EmptySubscription)
    }

    fn test_user(role: UserRole) -> CurrentUser {
        CurrentUser(User {
            id: Uuid::new_v4(),
            email: "guard@example.com".to_string(),
            password_hash: "unused".to_string(),
            role,
            verified: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn test_current_user_rejects_anonymous() {
        let response = test_schema().execute("{ whoami }").await;
        assert!(!response.errors.is_empty());
        assert_eq!(response.errors[0].message, "authentication required");
    }

    #[tokio::test]
    async fn test_current_user_allows_authenticated() {
        let request = Request::new("{ whoami }").data(test_user(UserRole::Client));
        let response = test_schema().execute(request).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    #[tokio::test]
    async fn test_require_role_rejects_wrong_role() {
        let request = Request::new("{ ownerOnly }").data(test_user(UserRole::Client));
        let response = test_schema().execute(request).await;
        assert!(!response.errors.is_empty());
        assert_eq!(response.errors[0].message, "owner role required");
    }

    #[tokio::test]
    async fn test_require_role_allows_matching_role() {
        let request = Request::new("{ ownerOnly }").data(test_user(UserRole::Owner));
        let response = test_schema().execute(request).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }
}
