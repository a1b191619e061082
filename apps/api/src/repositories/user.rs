//! User repository for centralized database operations
//!
//! This module provides all user-related database operations in a single
//! location, following the repository pattern.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::utils::USER_COLUMNS;
use crate::models::user::{User, UserRole};

/// Repository for user database operations
///
/// Read methods run against the pool directly. Write methods that take part
/// in multi-entity flows accept an executor so callers can pass either the
/// pool or an open transaction.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by their unique ID
    ///
    /// # Arguments
    /// * `user_id` - The UUID of the user to find
    ///
    /// # Returns
    /// * `Ok(Some(User))` - If the user exists
    /// * `Ok(None)` - If no user with the given ID exists
    /// * `Err(sqlx::Error)` - If a database error occurs
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find a user by their email address
    ///
    /// # Arguments
    /// * `email` - The email address to search for (case-insensitive)
    ///
    /// # Returns
    /// * `Ok(Some(User))` - If the user exists
    /// * `Ok(None)` - If no user with the given email exists
    /// * `Err(sqlx::Error)` - If a database error occurs
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await
    }

    /// Check if an email address is already registered
    ///
    /// # Arguments
    /// * `email` - The email address to check (case-insensitive)
    ///
    /// # Returns
    /// * `Ok(true)` - If the email is already registered
    /// * `Ok(false)` - If the email is available
    /// * `Err(sqlx::Error)` - If a database error occurs
    pub async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
            .bind(email.to_lowercase())
            .fetch_one(&self.pool)
            .await
    }

    /// Create a new user
    ///
    /// # Arguments
    /// * `db` - Pool or open transaction to run the insert on
    /// * `email` - User's email address (must be unique)
    /// * `password_hash` - Pre-hashed password (Argon2id)
    /// * `role` - User's role
    ///
    /// # Returns
    /// * `Ok(User)` - The newly created user
    /// * `Err(sqlx::Error)` - If a database error occurs (including unique
    ///   constraint violations)
    pub async fn create<'e>(
        &self,
        db: impl PgExecutor<'e>,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(email.to_lowercase())
            .bind(password_hash)
            .bind(role)
            .fetch_one(db)
            .await
    }

    /// Change a user's email address
    ///
    /// Also resets the verified flag: the new address has not been proven yet.
    pub async fn update_email<'e>(
        &self,
        db: impl PgExecutor<'e>,
        user_id: Uuid,
        email: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET email = $2, verified = FALSE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(email.to_lowercase())
        .execute(db)
        .await?;
        Ok(())
    }

    /// Replace a user's password hash
    pub async fn update_password<'e>(
        &self,
        db: impl PgExecutor<'e>,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(password_hash)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Mark a user's email address as verified
    pub async fn mark_verified<'e>(
        &self,
        db: impl PgExecutor<'e>,
        user_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET verified = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Delete a user account
    ///
    /// Verifications and restaurants cascade at the schema level.
    ///
    /// # Returns
    /// * `Ok(true)` - If a row was deleted
    /// * `Ok(false)` - If no user with the given ID existed
    pub async fn delete(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
