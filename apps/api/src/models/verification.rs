//! Email verification models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Pending email verification from the verifications table
///
/// Each user holds at most one pending verification; the row is deleted
/// once its code is redeemed.
#[derive(Debug, Clone, FromRow)]
pub struct Verification {
    /// Unique verification identifier
    pub id: Uuid,

    /// Single-use random code mailed to the user
    pub code: String,

    /// User this verification belongs to (unique)
    pub user_id: Uuid,

    /// When the verification was issued
    pub created_at: DateTime<Utc>,
}

impl Verification {
    /// Generate a fresh random verification code
    pub fn generate_code() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_unique() {
        let a = Verification::generate_code();
        let b = Verification::generate_code();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_generated_code_is_url_safe() {
        let code = Verification::generate_code();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
