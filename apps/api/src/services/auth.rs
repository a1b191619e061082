//! Credential and token handling for Nosh Eats
//!
//! This module provides the pure credential layer shared by the account
//! flows and the HTTP request pipeline:
//! - Argon2id password hashing and verification
//! - JWT signing and verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::user::Claims;

/// Credential service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token TTL in seconds (default: 7 days)
    pub token_ttl_secs: i64,
    /// JWT issuer
    pub issuer: String,
    /// JWT audience
    pub audience: String,
}

impl AuthConfig {
    /// Create a new AuthConfig with the default TTL
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            token_ttl_secs: 7 * 24 * 3600, // 7 days
            issuer: "nosh".to_string(),
            audience: "nosh".to_string(),
        }
    }

    /// Create an AuthConfig with the TTL given in hours
    pub fn with_expiry_hours(jwt_secret: String, hours: i64) -> Self {
        Self {
            token_ttl_secs: hours * 3600,
            ..Self::new(jwt_secret)
        }
    }
}

/// Credential service providing password hashing and token management
#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
    argon2: Argon2<'static>,
    /// Pre-computed dummy hash for timing attack prevention.
    /// We verify against this hash when a user is not found to ensure
    /// consistent response times regardless of whether the email exists.
    dummy_password_hash: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: AuthConfig) -> Self {
        let argon2 = Argon2::default();

        // Pre-compute a dummy password hash for timing attack prevention.
        // This hash is used when a user lookup fails, ensuring that the
        // password verification step takes the same amount of time whether
        // or not the user exists, preventing user enumeration attacks.
        let dummy_salt = SaltString::generate(&mut OsRng);
        let dummy_password_hash = argon2
            .hash_password(b"dummy_password_for_timing_attack_prevention", &dummy_salt)
            .expect("dummy password hashing should not fail")
            .to_string();

        Self {
            config,
            argon2,
            dummy_password_hash,
        }
    }

    /// Sign a JWT for the given user
    ///
    /// # Errors
    /// - `ApiError::Jwt` if encoding fails
    pub fn sign_token(&self, user_id: Uuid) -> ApiResult<String> {
        let claims = Claims::new(user_id, self.config.token_ttl_secs);

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a JWT and return its claims
    ///
    /// # Arguments
    /// * `token` - The JWT to verify
    ///
    /// # Returns
    /// The decoded Claims on success
    ///
    /// # Errors
    /// - `ApiError::InvalidToken` if the token is invalid, expired, or malformed
    pub fn verify_token(&self, token: &str) -> ApiResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            ApiError::InvalidToken(e.to_string())
        })?;

        Ok(token_data.claims)
    }

    /// Hash a password with Argon2id
    pub fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against an Argon2id hash
    pub fn verify_password(&self, password: &str, hash: &str) -> ApiResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| ApiError::Internal(format!("Invalid password hash format: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify a password against an optional stored hash
    ///
    /// SECURITY: Timing attack prevention for user enumeration.
    /// When no hash is present (the email did not match a user) the check
    /// still runs against a pre-computed dummy hash and reports false, so
    /// the verification step takes the same amount of time whether or not
    /// the user exists.
    pub fn verify_password_timing_safe(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> ApiResult<bool> {
        match stored_hash {
            Some(hash) => self.verify_password(password, hash),
            None => {
                let _ = self.verify_password(password, &self.dummy_password_hash);
                Ok(false)
            }
        }
    }
}

/// Simple email validation
pub(crate) fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > 254 {
        return false;
    }

    // Must have exactly one @ symbol
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);

    // Local part must not be empty and not too long
    if local.is_empty() || local.len() > 64 {
        return false;
    }

    // Domain must have at least one dot and not be empty
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Domain parts must not be empty
    domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new(AuthConfig::new("test-secret-for-auth-service".to_string()))
    }

    #[test]
    fn test_auth_config_new() {
        let config = AuthConfig::new("secret".to_string());
        assert_eq!(config.token_ttl_secs, 7 * 24 * 3600);
        assert_eq!(config.issuer, "nosh");
        assert_eq!(config.audience, "nosh");
    }

    #[test]
    fn test_auth_config_with_expiry_hours() {
        let config = AuthConfig::with_expiry_hours("secret".to_string(), 24);
        assert_eq!(config.token_ttl_secs, 24 * 3600);
        assert_eq!(config.issuer, "nosh");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@domain.co.uk"));
        assert!(is_valid_email("user123@test.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@domain.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@domain.com"));
    }

    #[test]
    fn test_hash_and_verify_password() {
        let service = test_service();
        let hash = service.hash_password("hunter42").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(service.verify_password("hunter42", &hash).unwrap());
        assert!(!service.verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashing_is_salted() {
        let service = test_service();
        let first = service.hash_password("hunter42").unwrap();
        let second = service.hash_password("hunter42").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sign_and_verify_token() {
        let service = test_service();
        let user_id = Uuid::new_v4();

        let token = service.sign_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "nosh");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_verify_token_rejects_wrong_secret() {
        let service = test_service();
        let other = AuthService::new(AuthConfig::new("a-completely-different-secret".to_string()));

        let token = service.sign_token(Uuid::new_v4()).unwrap();
        let result = other.verify_token(&token);

        assert!(matches!(result, Err(ApiError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_token_rejects_wrong_issuer() {
        // Claims always carry the "nosh" issuer, so a validator expecting
        // a different issuer must reject the token.
        let mut config = AuthConfig::new("test-secret-for-auth-service".to_string());
        config.issuer = "someone-else".to_string();
        let service = AuthService::new(config);

        let token = service.sign_token(Uuid::new_v4()).unwrap();
        let result = service.verify_token(&token);

        assert!(matches!(result, Err(ApiError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_token_rejects_garbage() {
        let service = test_service();
        let result = service.verify_token("not-a-jwt");
        assert!(matches!(result, Err(ApiError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_password_timing_safe_without_hash_reports_false() {
        let service = test_service();
        let valid = service
            .verify_password_timing_safe("any-password", None)
            .unwrap();
        assert!(!valid);
    }

    #[test]
    fn test_dummy_password_hash_for_timing_attack_prevention() {
        // The dummy hash must be a parseable Argon2 hash so that verifying
        // against it exercises the same code path as a real verification.
        let service = test_service();
        let parsed = PasswordHash::new(&service.dummy_password_hash);
        assert!(parsed.is_ok(), "Dummy hash should be parseable as Argon2");

        let argon2 = Argon2::default();
        let verify_result = argon2.verify_password(b"attacker_password", &parsed.unwrap());
        assert!(
            verify_result.is_err(),
            "Verification with wrong password should fail"
        );
    }
}
