//! Unified error handling for the nosh API
//!
//! Services return [`ApiResult`] and resolvers convert every [`ApiError`]
//! into the `{ ok, error }` envelope carried by GraphQL payloads. Unexpected
//! errors are logged server-side and presented to callers as a generic
//! message via [`ApiError::client_message`].

use axum::http::StatusCode;
use thiserror::Error;

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Authentication & Authorization ==========
    /// Invalid or missing authentication credentials
    #[error("authentication required")]
    Unauthorized,

    /// Invalid token (expired, malformed, etc.)
    #[error("invalid authentication token: {0}")]
    InvalidToken(String),

    /// Requester is not allowed to touch the resource
    #[error("insufficient permissions: {0}")]
    Forbidden(String),

    // ========== Account Errors ==========
    /// Email already registered
    #[error("there is already a user with that email")]
    DuplicateEmail,

    /// Password hash check failed
    #[error("wrong password")]
    InvalidPassword,

    /// Verification code unknown or already consumed
    #[error("verification not found")]
    VerificationNotFound,

    // ========== Resource Errors ==========
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ========== Validation Errors ==========
    /// Request validation failed
    #[error("validation error: {0}")]
    Validation(String),

    // ========== Infrastructure Errors ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JWT encoding/decoding error
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code class for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidToken(_) | Self::InvalidPassword => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound { .. } | Self::VerificationNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Jwt(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::VerificationNotFound => "VERIFICATION_NOT_FOUND",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Jwt(_) => "JWT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Message safe to place in a client-facing envelope
    ///
    /// Infrastructure errors carry driver details that must not leak to
    /// callers; everything else displays as-is.
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Jwt(_) | Self::Internal(_) => {
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Authorization error"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("restaurant", "123").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::InvalidPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Validation("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::Unauthorized.error_code(), "UNAUTHORIZED");
        assert_eq!(ApiError::DuplicateEmail.error_code(), "DUPLICATE_EMAIL");
        assert_eq!(
            ApiError::not_found("restaurant", "123").error_code(),
            "NOT_FOUND"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::not_found("restaurant", "abc123");
        assert_eq!(err.to_string(), "restaurant not found: abc123");
        assert_eq!(
            ApiError::DuplicateEmail.to_string(),
            "there is already a user with that email"
        );
    }

    #[test]
    fn test_client_message_masks_internals() {
        let err = ApiError::Internal("pool timed out while waiting".to_string());
        assert_eq!(err.client_message(), "internal server error");

        let err = ApiError::VerificationNotFound;
        assert_eq!(err.client_message(), "verification not found");
    }
}
