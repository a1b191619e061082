//! Dish mutations for the nosh GraphQL API
//!
//! This module provides mutations for menu management:
//! - createDish: Add a dish to a restaurant's menu
//! - editDish: Update a dish
//! - deleteDish: Remove a dish from the menu
//!
//! All dish mutations require the owner role and operate only on
//! restaurants the authenticated user owns.

use async_graphql::{Context, InputObject, Object, Result};
use uuid::Uuid;

use crate::graphql::guards::require_role;
use crate::graphql::types::{CreateDishPayload, DeleteDishPayload, EditDishPayload};
use crate::models::dish::DishOption;
use crate::models::user::UserRole;
use crate::repositories::DishChanges;
use crate::services::RestaurantService;

/// Input for a configurable dish option
#[derive(Debug, InputObject)]
pub struct DishOptionInput {
    /// Option name (e.g. "Spice Level")
    pub name: String,
    /// Choices the customer picks from (optional)
    pub choices: Option<Vec<String>>,
    /// Extra cost added when the option is selected (optional, defaults to 0)
    pub extra: Option<i32>,
}

impl From<DishOptionInput> for DishOption {
    fn from(input: DishOptionInput) -> Self {
        DishOption {
            name: input.name,
            choices: input.choices.unwrap_or_default(),
            extra: input.extra.unwrap_or(0),
        }
    }
}

/// Input for creating a dish
#[derive(Debug, InputObject)]
pub struct CreateDishInput {
    /// Restaurant the dish belongs to
    pub restaurant_id: Uuid,
    /// Dish name
    pub name: String,
    /// Price in the smallest currency unit (must not be negative)
    pub price: i32,
    /// URL to a photo of the dish (optional)
    pub photo: Option<String>,
    /// Menu description (5-140 characters)
    pub description: String,
    /// Configurable options (optional)
    pub options: Option<Vec<DishOptionInput>>,
}

/// Input for editing a dish
///
/// Include only the fields you want to change. Providing options
/// replaces the full option list.
#[derive(Debug, InputObject)]
pub struct EditDishInput {
    /// Dish to edit
    pub dish_id: Uuid,
    /// New name (optional)
    pub name: Option<String>,
    /// New price (optional, must not be negative)
    pub price: Option<i32>,
    /// New photo URL (optional)
    pub photo: Option<String>,
    /// New description (optional, 5-140 characters)
    pub description: Option<String>,
    /// Replacement option list (optional)
    pub options: Option<Vec<DishOptionInput>>,
}

/// Input for deleting a dish
#[derive(Debug, InputObject)]
pub struct DeleteDishInput {
    /// Dish to delete
    pub dish_id: Uuid,
}

/// Menu management mutations
#[derive(Default)]
pub struct DishMutation;

#[Object]
impl DishMutation {
    /// Add a dish to a restaurant owned by the authenticated user
    ///
    /// # Errors
    /// - Returns error if not authenticated as an owner
    async fn create_dish(
        &self,
        ctx: &Context<'_>,
        input: CreateDishInput,
    ) -> Result<CreateDishPayload> {
        let current = require_role(ctx, UserRole::Owner)?;
        let service = ctx.data::<RestaurantService>()?;

        let options: Vec<DishOption> = input
            .options
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        let payload = match service
            .create_dish(
                current.id(),
                input.restaurant_id,
                &input.name,
                input.price,
                input.photo.as_deref(),
                &input.description,
                &options,
            )
            .await
        {
            Ok(dish) => CreateDishPayload::ok(dish.id),
            Err(e) => CreateDishPayload::err(&e),
        };
        Ok(payload)
    }

    /// Update a dish on a restaurant owned by the authenticated user
    ///
    /// # Errors
    /// - Returns error if not authenticated as an owner
    async fn edit_dish(&self, ctx: &Context<'_>, input: EditDishInput) -> Result<EditDishPayload> {
        let current = require_role(ctx, UserRole::Owner)?;
        let service = ctx.data::<RestaurantService>()?;

        let changes = DishChanges {
            name: input.name,
            price: input.price,
            photo: input.photo,
            description: input.description,
            options: input
                .options
                .map(|options| options.into_iter().map(Into::into).collect()),
        };

        let payload = match service.edit_dish(current.id(), input.dish_id, changes).await {
            Ok(_) => EditDishPayload::ok(),
            Err(e) => EditDishPayload::err(&e),
        };
        Ok(payload)
    }

    /// Remove a dish from a restaurant owned by the authenticated user
    ///
    /// # Errors
    /// - Returns error if not authenticated as an owner
    async fn delete_dish(
        &self,
        ctx: &Context<'_>,
        input: DeleteDishInput,
    ) -> Result<DeleteDishPayload> {
        let current = require_role(ctx, UserRole::Owner)?;
        let service = ctx.data::<RestaurantService>()?;

        let payload = match service.delete_dish(current.id(), input.dish_id).await {
            Ok(()) => DeleteDishPayload::ok(),
            Err(e) => DeleteDishPayload::err(&e),
        };
        Ok(payload)
    }
}
