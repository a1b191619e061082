//! Shared outcome envelope for GraphQL payloads

use async_graphql::{ComplexObject, SimpleObject};

use crate::error::ApiError;

/// Outcome carried by every payload: `ok` plus an optional error message
///
/// Domain failures travel inside this envelope rather than as GraphQL
/// errors, so clients always receive a well-formed payload. Infrastructure
/// errors are logged server-side and masked before reaching the envelope.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct OperationStatus {
    /// Whether the operation succeeded
    // Skipped by the derive so its resolver doesn't collide with the
    // `OperationStatus::ok` constructor; exposed as `ok` below instead.
    #[graphql(skip)]
    pub ok: bool,
    /// Human-readable error message when `ok` is false
    pub error: Option<String>,
}

#[ComplexObject]
impl OperationStatus {
    /// Whether the operation succeeded
    #[graphql(name = "ok")]
    async fn ok_field(&self) -> bool {
        self.ok
    }
}

impl OperationStatus {
    /// Successful outcome
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// Failed outcome derived from a domain error
    ///
    /// Logs the error at the severity matching its class and converts it
    /// to a client-safe message via [`ApiError::client_message`].
    pub fn err(error: &ApiError) -> Self {
        error.log();
        Self {
            ok: false,
            error: Some(error.client_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_status() {
        let status = OperationStatus::ok();
        assert!(status.ok);
        assert!(status.error.is_none());
    }

    #[test]
    fn test_err_status_carries_message() {
        let status = OperationStatus::err(&ApiError::DuplicateEmail);
        assert!(!status.ok);
        assert_eq!(
            status.error.as_deref(),
            Some("there is already a user with that email")
        );
    }

    #[test]
    fn test_err_status_masks_infrastructure_errors() {
        let status = OperationStatus::err(&ApiError::Internal("pool exhausted".to_string()));
        assert_eq!(status.error.as_deref(), Some("internal server error"));
    }
}
