//! User and authentication models for nosh
//!
//! This module contains the database models for:
//! - User accounts and roles
//! - JWT claims and the per-request authenticated user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User role enum matching PostgreSQL user_role type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    /// Places orders
    #[default]
    Client,
    /// Runs one or more restaurants
    Owner,
    /// Delivers orders
    Delivery,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Owner => write!(f, "owner"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

/// User account from the users table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// User's email address (unique, stored lower-cased)
    pub email: String,

    /// Argon2 hashed password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// User's role (client, owner, delivery)
    pub role: UserRole,

    /// Whether the email address has been verified
    pub verified: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last profile update timestamp
    pub updated_at: DateTime<Utc>,
}

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,

    /// Issued at timestamp (Unix epoch)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch)
    pub exp: i64,

    /// Issuer
    #[serde(default = "default_issuer")]
    pub iss: String,

    /// Audience
    #[serde(default = "default_audience")]
    pub aud: String,
}

fn default_issuer() -> String {
    "nosh".to_string()
}

fn default_audience() -> String {
    "nosh".to_string()
}

impl Claims {
    /// Create new claims for a user
    pub fn new(user_id: Uuid, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id,
            iat: now,
            exp: now + ttl_secs,
            iss: default_issuer(),
            aud: default_audience(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// The authenticated user for the current request
///
/// Injected into the GraphQL request data once the bearer token has been
/// verified and the user row loaded; absent for anonymous requests.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// The authenticated user's id
    pub fn id(&self) -> Uuid {
        self.0.id
    }

    /// The authenticated user's role
    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_default() {
        assert_eq!(UserRole::default(), UserRole::Client);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Client.to_string(), "client");
        assert_eq!(UserRole::Owner.to_string(), "owner");
        assert_eq!(UserRole::Delivery.to_string(), "delivery");
    }

    #[test]
    fn test_claims_is_expired() {
        let mut claims = Claims::new(Uuid::new_v4(), 3600);
        assert!(!claims.is_expired());

        // Expired token
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "argon2-hash".to_string(),
            role: UserRole::Client,
            verified: false,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2-hash"));
        assert!(json.contains("test@example.com"));
    }
}
