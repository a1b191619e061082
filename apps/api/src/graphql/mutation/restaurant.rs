//! Restaurant mutations for the nosh GraphQL API
//!
//! This module provides mutations for restaurant management:
//! - createRestaurant: Register a new restaurant under a category
//! - editRestaurant: Update name, images, address or category
//! - deleteRestaurant: Remove a restaurant and its menu
//!
//! All restaurant mutations require the owner role, and edits are
//! restricted to the restaurant's own owner.

use async_graphql::{Context, InputObject, Object, Result};
use uuid::Uuid;

use crate::graphql::guards::require_role;
use crate::graphql::types::{
    CreateRestaurantPayload, DeleteRestaurantPayload, EditRestaurantPayload,
};
use crate::models::user::UserRole;
use crate::services::restaurant::EditRestaurantChanges;
use crate::services::RestaurantService;

/// Input for creating a restaurant
#[derive(Debug, InputObject)]
pub struct CreateRestaurantInput {
    /// Restaurant name (1-100 characters)
    pub name: String,
    /// URL to the cover image
    pub cover_image: String,
    /// Street address
    pub address: String,
    /// Category name; the category is created if it does not exist yet
    pub category_name: String,
}

/// Input for editing a restaurant
///
/// Include only the fields you want to change.
#[derive(Debug, InputObject)]
pub struct EditRestaurantInput {
    /// Restaurant to edit
    pub restaurant_id: Uuid,
    /// New name (optional)
    pub name: Option<String>,
    /// New cover image URL (optional)
    pub cover_image: Option<String>,
    /// New street address (optional)
    pub address: Option<String>,
    /// New category name; created if it does not exist yet (optional)
    pub category_name: Option<String>,
}

/// Input for deleting a restaurant
#[derive(Debug, InputObject)]
pub struct DeleteRestaurantInput {
    /// Restaurant to delete
    pub restaurant_id: Uuid,
}

/// Restaurant management mutations
#[derive(Default)]
pub struct RestaurantMutation;

#[Object]
impl RestaurantMutation {
    /// Register a new restaurant owned by the authenticated user
    ///
    /// The named category is looked up by slug and created on demand.
    ///
    /// # Errors
    /// - Returns error if not authenticated as an owner
    async fn create_restaurant(
        &self,
        ctx: &Context<'_>,
        input: CreateRestaurantInput,
    ) -> Result<CreateRestaurantPayload> {
        let current = require_role(ctx, UserRole::Owner)?;
        let service = ctx.data::<RestaurantService>()?;

        let payload = match service
            .create_restaurant(
                current.id(),
                &input.name,
                &input.cover_image,
                &input.address,
                &input.category_name,
            )
            .await
        {
            Ok(restaurant) => CreateRestaurantPayload::ok(restaurant.id),
            Err(e) => CreateRestaurantPayload::err(&e),
        };
        Ok(payload)
    }

    /// Update a restaurant owned by the authenticated user
    ///
    /// # Errors
    /// - Returns error if not authenticated as an owner
    async fn edit_restaurant(
        &self,
        ctx: &Context<'_>,
        input: EditRestaurantInput,
    ) -> Result<EditRestaurantPayload> {
        let current = require_role(ctx, UserRole::Owner)?;
        let service = ctx.data::<RestaurantService>()?;

        let changes = EditRestaurantChanges {
            name: input.name,
            cover_image: input.cover_image,
            address: input.address,
            category_name: input.category_name,
        };

        let payload = match service
            .edit_restaurant(current.id(), input.restaurant_id, changes)
            .await
        {
            Ok(_) => EditRestaurantPayload::ok(),
            Err(e) => EditRestaurantPayload::err(&e),
        };
        Ok(payload)
    }

    /// Delete a restaurant owned by the authenticated user
    ///
    /// # Errors
    /// - Returns error if not authenticated as an owner
    async fn delete_restaurant(
        &self,
        ctx: &Context<'_>,
        input: DeleteRestaurantInput,
    ) -> Result<DeleteRestaurantPayload> {
        let current = require_role(ctx, UserRole::Owner)?;
        let service = ctx.data::<RestaurantService>()?;

        let payload = match service
            .delete_restaurant(current.id(), input.restaurant_id)
            .await
        {
            Ok(()) => DeleteRestaurantPayload::ok(),
            Err(e) => DeleteRestaurantPayload::err(&e),
        };
        Ok(payload)
    }
}
