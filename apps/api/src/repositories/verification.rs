//! Verification repository for centralized database operations

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::utils::VERIFICATION_COLUMNS;
use crate::models::verification::Verification;

/// Repository for email verification database operations
#[derive(Clone)]
pub struct VerificationRepository {
    pool: PgPool,
}

impl VerificationRepository {
    /// Create a new VerificationRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a pending verification by its code
    ///
    /// Runs on an executor because redemption reads the row inside the same
    /// transaction that consumes it.
    pub async fn find_by_code<'e>(
        &self,
        db: impl PgExecutor<'e>,
        code: &str,
    ) -> Result<Option<Verification>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM verifications WHERE code = $1",
            VERIFICATION_COLUMNS
        );
        sqlx::query_as::<_, Verification>(&sql)
            .bind(code)
            .fetch_optional(db)
            .await
    }

    /// Find the pending verification for a user, if any
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Verification>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM verifications WHERE user_id = $1",
            VERIFICATION_COLUMNS
        );
        sqlx::query_as::<_, Verification>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Issue a fresh verification for a user, replacing any pending one
    ///
    /// A user holds at most one pending verification; re-issuing swaps in a
    /// newly generated code and resets the issue timestamp.
    pub async fn replace_for_user<'e>(
        &self,
        db: impl PgExecutor<'e>,
        user_id: Uuid,
    ) -> Result<Verification, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO verifications (code, user_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET code = EXCLUDED.code, created_at = NOW()
            RETURNING {}
            "#,
            VERIFICATION_COLUMNS
        );
        sqlx::query_as::<_, Verification>(&sql)
            .bind(Verification::generate_code())
            .bind(user_id)
            .fetch_one(db)
            .await
    }

    /// Delete a verification once its code has been redeemed
    ///
    /// # Returns
    /// * `Ok(true)` - If a row was deleted
    /// * `Ok(false)` - If the verification was already gone
    pub async fn delete<'e>(
        &self,
        db: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM verifications WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
