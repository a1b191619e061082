//! Dish repository for centralized database operations

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::utils::DISH_COLUMNS;
use crate::models::dish::{Dish, DishOption};

/// Partial update for a dish row
///
/// `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct DishChanges {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<DishOption>>,
}

/// Repository for dish database operations
#[derive(Clone)]
pub struct DishRepository {
    pool: PgPool,
}

impl DishRepository {
    /// Create a new DishRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new dish on a restaurant's menu
    pub async fn create<'e>(
        &self,
        db: impl PgExecutor<'e>,
        restaurant_id: Uuid,
        name: &str,
        price: i32,
        photo: Option<&str>,
        description: &str,
        options: &[DishOption],
    ) -> Result<Dish, sqlx::Error> {
        let options_json =
            serde_json::to_value(options).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let sql = format!(
            r#"
            INSERT INTO dishes (restaurant_id, name, price, photo, description, options)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            DISH_COLUMNS
        );
        sqlx::query_as::<_, Dish>(&sql)
            .bind(restaurant_id)
            .bind(name)
            .bind(price)
            .bind(photo)
            .bind(description)
            .bind(options_json)
            .fetch_one(db)
            .await
    }

    /// Find a dish by its unique ID
    pub async fn find_by_id(&self, dish_id: Uuid) -> Result<Option<Dish>, sqlx::Error> {
        let sql = format!("SELECT {} FROM dishes WHERE id = $1", DISH_COLUMNS);
        sqlx::query_as::<_, Dish>(&sql)
            .bind(dish_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List a restaurant's menu
    pub async fn find_by_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<Dish>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM dishes WHERE restaurant_id = $1 ORDER BY name",
            DISH_COLUMNS
        );
        sqlx::query_as::<_, Dish>(&sql)
            .bind(restaurant_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Apply a partial update to a dish
    ///
    /// Unset fields keep their current values via COALESCE.
    pub async fn update<'e>(
        &self,
        db: impl PgExecutor<'e>,
        dish_id: Uuid,
        changes: DishChanges,
    ) -> Result<Dish, sqlx::Error> {
        let options_json = changes
            .options
            .as_deref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let sql = format!(
            r#"
            UPDATE dishes
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                photo = COALESCE($4, photo),
                description = COALESCE($5, description),
                options = COALESCE($6, options),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            DISH_COLUMNS
        );
        sqlx::query_as::<_, Dish>(&sql)
            .bind(dish_id)
            .bind(changes.name)
            .bind(changes.price)
            .bind(changes.photo)
            .bind(changes.description)
            .bind(options_json)
            .fetch_one(db)
            .await
    }

    /// Delete a dish
    ///
    /// # Returns
    /// * `Ok(true)` - If a row was deleted
    /// * `Ok(false)` - If no dish with the given ID existed
    pub async fn delete(&self, dish_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = $1")
            .bind(dish_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
