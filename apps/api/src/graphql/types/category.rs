//! Category GraphQL type and category payloads

use async_graphql::{Context, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::category::Category as DbCategory;
use crate::models::restaurant::Restaurant as DbRestaurant;
use crate::repositories::RestaurantRepository;

use super::common::OperationStatus;
use super::restaurant::Restaurant;

/// Category information exposed via GraphQL
pub struct Category {
    inner: DbCategory,
}

impl Category {
    /// Create a new GraphQL Category from a database Category
    pub fn new(category: DbCategory) -> Self {
        Self { inner: category }
    }
}

impl From<DbCategory> for Category {
    fn from(category: DbCategory) -> Self {
        Self::new(category)
    }
}

#[Object]
impl Category {
    /// Unique category identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// URL-safe identifier derived from the name
    async fn slug(&self) -> &str {
        &self.inner.slug
    }

    /// URL to a cover image
    async fn cover_image(&self) -> Option<&str> {
        self.inner.cover_image.as_deref()
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }

    // Relationship resolvers

    /// Number of restaurants filed under this category
    async fn restaurant_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let restaurant_repo = ctx.data::<RestaurantRepository>()?;
        let count = restaurant_repo.count_by_category(self.inner.id).await?;
        Ok(count)
    }
}

/// Payload returned by the allCategories query
#[derive(SimpleObject)]
pub struct AllCategoriesPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// Every known category
    pub categories: Option<Vec<Category>>,
}

impl AllCategoriesPayload {
    pub fn ok(categories: Vec<DbCategory>) -> Self {
        Self {
            status: OperationStatus::ok(),
            categories: Some(categories.into_iter().map(Into::into).collect()),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            categories: None,
        }
    }
}

/// Payload returned by the category query
#[derive(SimpleObject)]
pub struct CategoryPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// The matched category
    pub category: Option<Category>,
    /// One page of restaurants in the category
    pub restaurants: Option<Vec<Restaurant>>,
    /// Total number of pages available
    pub total_pages: Option<i64>,
    /// Total number of restaurants in the category
    pub total_results: Option<i64>,
}

impl CategoryPayload {
    pub fn ok(
        category: DbCategory,
        restaurants: Vec<DbRestaurant>,
        total_pages: i64,
        total_results: i64,
    ) -> Self {
        Self {
            status: OperationStatus::ok(),
            category: Some(category.into()),
            restaurants: Some(restaurants.into_iter().map(Into::into).collect()),
            total_pages: Some(total_pages),
            total_results: Some(total_results),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            category: None,
            restaurants: None,
            total_pages: None,
            total_results: None,
        }
    }
}
