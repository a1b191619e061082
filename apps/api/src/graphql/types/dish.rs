//! Dish GraphQL types and menu payloads

use async_graphql::{Object, SimpleObject};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::dish::{Dish as DbDish, DishOption as DbDishOption};

use super::common::OperationStatus;

/// A configurable option on a dish (e.g. "Spice Level")
#[derive(Debug, Clone, SimpleObject)]
pub struct DishOption {
    /// Option name
    pub name: String,
    /// Choices the customer picks from
    pub choices: Vec<String>,
    /// Extra cost added when the option is selected
    pub extra: i32,
}

impl From<DbDishOption> for DishOption {
    fn from(option: DbDishOption) -> Self {
        Self {
            name: option.name,
            choices: option.choices,
            extra: option.extra,
        }
    }
}

/// Dish information exposed via GraphQL
pub struct Dish {
    inner: DbDish,
}

impl Dish {
    /// Create a new GraphQL Dish from a database Dish
    pub fn new(dish: DbDish) -> Self {
        Self { inner: dish }
    }
}

impl From<DbDish> for Dish {
    fn from(dish: DbDish) -> Self {
        Self::new(dish)
    }
}

#[Object]
impl Dish {
    /// Unique dish identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Dish name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Price in the restaurant's smallest currency unit
    async fn price(&self) -> i32 {
        self.inner.price
    }

    /// URL to a photo of the dish
    async fn photo(&self) -> Option<&str> {
        self.inner.photo.as_deref()
    }

    /// Menu description
    async fn description(&self) -> &str {
        &self.inner.description
    }

    /// Restaurant this dish belongs to
    async fn restaurant_id(&self) -> Uuid {
        self.inner.restaurant_id
    }

    /// Configurable options
    async fn options(&self) -> Vec<DishOption> {
        self.inner.options.iter().cloned().map(Into::into).collect()
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}

/// Payload returned by the createDish mutation
#[derive(SimpleObject)]
pub struct CreateDishPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
    /// Identifier of the new dish on success
    pub dish_id: Option<Uuid>,
}

impl CreateDishPayload {
    pub fn ok(dish_id: Uuid) -> Self {
        Self {
            status: OperationStatus::ok(),
            dish_id: Some(dish_id),
        }
    }

    pub fn err(error: &ApiError) -> Self {
        Self {
            status: OperationStatus::err(error),
            dish_id: None,
        }
    }
}

/// Payload returned by the editDish mutation
#[derive(SimpleObject)]
pub struct EditDishPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl EditDishPayload {
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

/// Payload returned by the deleteDish mutation
#[derive(SimpleObject)]
pub struct DeleteDishPayload {
    #[graphql(flatten)]
    pub status: OperationStatus,
}

impl DeleteDishPayload {
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
