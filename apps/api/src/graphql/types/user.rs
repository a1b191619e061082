//! User GraphQL types and account payloads

use async_graphql::{Enum, Object, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::user::{User as DbUser, UserRole as DbUserRole};

use super::common::OperationStatus;

/// User role enum for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum UserRole {
    /// Customer placing orders
    Client,
    /// Restaurant owner
    Owner,
    /// Delivery rider
    Delivery,
}

impl From<DbUserRole> for UserRole {
    fn from(role: DbUserRole) -> Self {
        match role {
            DbUserRole::Client => Self::Client,
            DbUserRole::Owner => Self::Owner,
            DbUserRole::Delivery => Self::Delivery,
        }
    }
}

impl From<UserRole> for DbUserRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Client => Self::Client,
            UserRole::Owner => Self::Owner,
            UserRole::Delivery => Self::Delivery,
        }
    }
}

/// User account information exposed via GraphQL
///
/// The password hash stays on the database model and has no resolver.
pub struct User {
    inner: DbUser,
}

impl User {
    /// Create a new GraphQL User from a database User
    pub fn new(user: DbUser) -> Self {
        Self { inner: user }
    }
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self::new(user)
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// User's email address
    async fn email(&self) -> &str {
        &self.inner.email
    }

    /// User's role (client, owner, delivery)
    async fn role(&self) -> UserRole {
        self.inner.role.into()
    }

    /// Whether the email address has been verified
    async fn verified(&self) -> bool {
        self.inner.verified
    }

    /// Account creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last account update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}

/// Payload returned by the createAccount mutation
#[derive(SimpleObject)]
pub struct CreateAccountPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl CreateAccountPayload {
    pub fn ok() -> Self {
        Self {
            status: OperationStatus::ok(),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
        }
    }
}

/// Payload returned by the login mutation
#[derive(SimpleObject)]
pub struct LoginPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// Signed JWT on success
    pub token: Option<String>,
}

impl LoginPayload {
    pub fn ok(token: String) -> Self {
        Self {
            status: OperationStatus::ok(),
            token: Some(token),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            token: None,
        }
    }
}

/// Payload returned by the userProfile query
#[derive(SimpleObject)]
pub struct UserProfilePayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// The requested user on success
    pub user: Option<User>,
}

impl UserProfilePayload {
    pub fn ok(user: DbUser) -> Self {
        Self {
            status: OperationStatus::ok(),
            user: Some(user.into()),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            user: None,
        }
    }
}

/// Payload returned by the editProfile mutation
#[derive(SimpleObject)]
pub struct EditProfilePayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl EditProfilePayload {
    pub fn ok() -> Self {
        Self {
            status: OperationStatus::ok(),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
        }
    }
}

/// Payload returned by the deleteAccount mutation
#[derive(SimpleObject)]
pub struct DeleteAccountPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl DeleteAccountPayload {
    pub fn ok() -> Self {
        Self {
            status: OperationStatus::ok(),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
        }
    }
}

/// Payload returned by the verifyEmail mutation
#[derive(SimpleObject)]
pub struct VerifyEmailPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl VerifyEmailPayload {
    pub fn ok() -> Self {
        Self {
            status: OperationStatus::ok(),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_conversion() {
        assert!(matches!(
            UserRole::from(DbUserRole::Client),
            UserRole::Client
        ));
        assert!(matches!(UserRole::from(DbUserRole::Owner), UserRole::Owner));
        assert!(matches!(
            UserRole::from(DbUserRole::Delivery),
            UserRole::Delivery
        ));
    }

    #[test]
    fn test_login_payload_err_has_no_token() {
        let payload = LoginPayload::err(&ApiError::InvalidPassword);
        assert!(!payload.status.ok);
        assert_eq!(payload.status.error.as_deref(), Some("wrong password"));
        assert!(payload.token.is_none());
    }
}
