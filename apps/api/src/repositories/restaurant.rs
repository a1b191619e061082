//! Restaurant repository for centralized database operations
//!
//! This module provides all restaurant-related database operations in a
//! single location, following the repository pattern.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::utils::{escape_ilike, RESTAURANT_COLUMNS};
use crate::models::restaurant::Restaurant;

/// Partial update for a restaurant row
///
/// `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct RestaurantChanges {
    pub name: Option<String>,
    pub cover_image: Option<String>,
    pub address: Option<String>,
    pub category_id: Option<Uuid>,
}

/// Repository for restaurant database operations
#[derive(Clone)]
pub struct RestaurantRepository {
    pool: PgPool,
}

impl RestaurantRepository {
    /// Create a new RestaurantRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new restaurant owned by the given user
    pub async fn create<'e>(
        &self,
        db: impl PgExecutor<'e>,
        owner_id: Uuid,
        name: &str,
        cover_image: &str,
        address: &str,
        category_id: Option<Uuid>,
    ) -> Result<Restaurant, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO restaurants (name, cover_image, address, owner_id, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            RESTAURANT_COLUMNS
        );
        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(name)
            .bind(cover_image)
            .bind(address)
            .bind(owner_id)
            .bind(category_id)
            .fetch_one(db)
            .await
    }

    /// Find a restaurant by its unique ID
    pub async fn find_by_id(&self, restaurant_id: Uuid) -> Result<Option<Restaurant>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM restaurants WHERE id = $1",
            RESTAURANT_COLUMNS
        );
        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(restaurant_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Apply a partial update to a restaurant
    ///
    /// Unset fields keep their current values via COALESCE.
    pub async fn update<'e>(
        &self,
        db: impl PgExecutor<'e>,
        restaurant_id: Uuid,
        changes: RestaurantChanges,
    ) -> Result<Restaurant, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE restaurants
            SET name = COALESCE($2, name),
                cover_image = COALESCE($3, cover_image),
                address = COALESCE($4, address),
                category_id = COALESCE($5, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            RESTAURANT_COLUMNS
        );
        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(restaurant_id)
            .bind(changes.name)
            .bind(changes.cover_image)
            .bind(changes.address)
            .bind(changes.category_id)
            .fetch_one(db)
            .await
    }

    /// Delete a restaurant
    ///
    /// Dishes cascade at the schema level.
    ///
    /// # Returns
    /// * `Ok(true)` - If a row was deleted
    /// * `Ok(false)` - If no restaurant with the given ID existed
    pub async fn delete(&self, restaurant_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(restaurant_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch one page of restaurants, newest first
    pub async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Restaurant>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM restaurants ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            RESTAURANT_COLUMNS
        );
        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Total number of restaurants
    pub async fn count_all(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&self.pool)
            .await
    }

    /// Fetch one page of restaurants in a category, newest first
    pub async fn find_by_category(
        &self,
        category_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM restaurants WHERE category_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            RESTAURANT_COLUMNS
        );
        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Number of restaurants filed under a category
    pub async fn count_by_category(&self, category_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM restaurants WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Search restaurants by name, case-insensitive substring match
    ///
    /// Escapes ILIKE special characters to prevent pattern injection.
    pub async fn search_by_name(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Restaurant>, sqlx::Error> {
        let escaped = escape_ilike(query);
        let sql = format!(
            "SELECT {} FROM restaurants WHERE name ILIKE $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            RESTAURANT_COLUMNS
        );
        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(format!("%{}%", escaped))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    /// Number of restaurants whose name matches the query
    pub async fn count_search(&self, query: &str) -> Result<i64, sqlx::Error> {
        let escaped = escape_ilike(query);
        sqlx::query_scalar("SELECT COUNT(*) FROM restaurants WHERE name ILIKE $1")
            .bind(format!("%{}%", escaped))
            .fetch_one(&self.pool)
            .await
    }
}
