//! Restaurant GraphQL type and restaurant payloads
//!
//! This module defines the GraphQL type for restaurants with relationship
//! resolvers for the category and the menu.

use async_graphql::{Context, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::restaurant::Restaurant as DbRestaurant;
use crate::repositories::{CategoryRepository, DishRepository};

use super::common::OperationStatus;
use super::dish::Dish;

/// Restaurant information exposed via GraphQL
pub struct Restaurant {
    inner: DbRestaurant,
}

impl Restaurant {
    /// Create a new GraphQL Restaurant from a database Restaurant
    pub fn new(restaurant: DbRestaurant) -> Self {
        Self { inner: restaurant }
    }
}

impl From<DbRestaurant> for Restaurant {
    fn from(restaurant: DbRestaurant) -> Self {
        Self::new(restaurant)
    }
}

#[Object]
impl Restaurant {
    /// Unique restaurant identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Restaurant name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// URL to the cover image
    async fn cover_image(&self) -> &str {
        &self.inner.cover_image
    }

    /// Street address
    async fn address(&self) -> &str {
        &self.inner.address
    }

    /// User who owns this restaurant
    async fn owner_id(&self) -> Uuid {
        self.inner.owner_id
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

    /// Category this restaurant is filed under
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<super::category::Category>> {
        let category_id = match self.inner.category_id {
            Some(id) => id,
            None => return Ok(None),
        };

        let category_repo = ctx.data::<CategoryRepository>()?;
        let category = category_repo.find_by_id(category_id).await?;
        Ok(category.map(Into::into))
    }

    /// Dishes on this restaurant's menu
    async fn menu(&self, ctx: &Context<'_>) -> Result<Vec<Dish>> {
        let dish_repo = ctx.data::<DishRepository>()?;
        let dishes = dish_repo.find_by_restaurant(self.inner.id).await?;
        Ok(dishes.into_iter().map(Into::into).collect())
    }
}

/// Payload returned by the restaurants query
#[derive(SimpleObject)]
pub struct RestaurantsPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// One page of restaurants
    pub results: Option<Vec<Restaurant>>,
    /// Total number of pages available
    pub total_pages: Option<i64>,
    /// Total number of restaurants
    pub total_results: Option<i64>,
}

impl RestaurantsPayload {
    pub fn ok(restaurants: Vec<DbRestaurant>, total_pages: i64, total_results: i64) -> Self {
        Self {
            status: OperationStatus::ok(),
            results: Some(restaurants.into_iter().map(Into::into).collect()),
            total_pages: Some(total_pages),
            total_results: Some(total_results),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            results: None,
            total_pages: None,
            total_results: None,
        }
    }
}

/// Payload returned by the restaurant query
#[derive(SimpleObject)]
pub struct RestaurantPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// The matched restaurant
    pub restaurant: Option<Restaurant>,
}

impl RestaurantPayload {
    pub fn ok(restaurant: DbRestaurant) -> Self {
        Self {
            status: OperationStatus::ok(),
            restaurant: Some(restaurant.into()),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            restaurant: None,
        }
    }
}

/// Payload returned by the searchRestaurant query
#[derive(SimpleObject)]
pub struct SearchRestaurantPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// One page of matching restaurants
    pub restaurants: Option<Vec<Restaurant>>,
    /// Total number of pages available
    pub total_pages: Option<i64>,
    /// Total number of matching restaurants
    pub total_results: Option<i64>,
}

impl SearchRestaurantPayload {
    pub fn ok(restaurants: Vec<DbRestaurant>, total_pages: i64, total_results: i64) -> Self {
        Self {
            status: OperationStatus::ok(),
            restaurants: Some(restaurants.into_iter().map(Into::into).collect()),
            total_pages: Some(total_pages),
            total_results: Some(total_results),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            restaurants: None,
            total_pages: None,
            total_results: None,
        }
    }
}

/// Payload returned by the createRestaurant mutation
#[derive(SimpleObject)]
pub struct CreateRestaurantPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// Identifier of the new restaurant on success
    pub restaurant_id: Option<Uuid>,
}

impl CreateRestaurantPayload {
    pub fn ok(restaurant_id: Uuid) -> Self {
        Self {
            status: OperationStatus::ok(),
            restaurant_id: Some(restaurant_id),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            restaurant_id: None,
        }
    }
}

/// Payload returned by the editRestaurant mutation
#[derive(SimpleObject)]
pub struct EditRestaurantPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl EditRestaurantPayload {
    pub fn ok() -> Self {
        Self {
            status: OperationStatus::ok(),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
        }
    }
}

/// Payload returned by the deleteRestaurant mutation
#[derive(SimpleObject)]
pub struct DeleteRestaurantPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl DeleteRestaurantPayload {
    pub fn ok() -> Self {
        Self {
            status: OperationStatus::ok(),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
        }
    }
}
