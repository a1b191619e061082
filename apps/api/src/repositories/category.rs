//! Category repository for centralized database operations

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use super::utils::CATEGORY_COLUMNS;
use crate::models::category::Category;

/// Repository for category database operations
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new CategoryRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Look up or create a category by name, keyed on its derived slug
    ///
    /// Runs as a single conditional insert guarded by the unique slug
    /// constraint, so two concurrent calls with the same name both land on
    /// the same row. An existing category keeps its stored name.
    ///
    /// # Arguments
    /// * `db` - Pool or open transaction to run the upsert on
    /// * `name` - Raw category name as supplied by the caller
    pub async fn get_or_create<'e>(
        &self,
        db: impl PgExecutor<'e>,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let normalized = name.trim().to_lowercase();
        let slug = Category::slugify(name);

        let sql = format!(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            ON CONFLICT (slug)
            DO UPDATE SET name = categories.name
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );
        sqlx::query_as::<_, Category>(&sql)
            .bind(normalized)
            .bind(slug)
            .fetch_one(db)
            .await
    }

    /// Find a category by its unique ID
    pub async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, sqlx::Error> {
        let sql = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);
        sqlx::query_as::<_, Category>(&sql)
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find a category by its slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let sql = format!("SELECT {} FROM categories WHERE slug = $1", CATEGORY_COLUMNS);
        sqlx::query_as::<_, Category>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
    }

    /// List all categories, ordered by name
    pub async fn find_all(&self) -> Result<Vec<Category>, sqlx::Error> {
        let sql = format!("SELECT {} FROM categories ORDER BY name", CATEGORY_COLUMNS);
        sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await
    }
}
