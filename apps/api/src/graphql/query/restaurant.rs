//! Restaurant queries for the nosh GraphQL API
//!
//! This module provides queries for browsing restaurants:
//! - Restaurants: Paged listing and lookup by id
//! - Search: Name search with paging
//! - Categories: Listing and per-category restaurant pages

use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::graphql::pagination::{clamp_page, page_offset, total_pages, PAGE_SIZE};
use crate::graphql::types::{
    AllCategoriesPayload, CategoryPayload, RestaurantPayload, RestaurantsPayload,
    SearchRestaurantPayload,
};
use crate::services::RestaurantService;

/// Restaurant-related queries for browsing restaurants and categories
#[derive(Default)]
pub struct RestaurantQuery;

#[Object]
impl RestaurantQuery {
    /// List restaurants, newest first, 25 per page
    async fn restaurants(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
    ) -> Result<RestaurantsPayload> {
        let service = ctx.data::<RestaurantService>()?;
        let page = clamp_page(page);

        let payload = match service.list_restaurants(PAGE_SIZE, page_offset(page)).await {
            Ok((restaurants, total)) => {
                RestaurantsPayload::ok(restaurants, total_pages(total), total)
            }
            Err(e) => RestaurantsPayload::err(&e),
        };
        Ok(payload)
    }

    /// Get a restaurant by id
    async fn restaurant(
        &self,
        ctx: &Context<'_>,
        restaurant_id: Uuid,
    ) -> Result<RestaurantPayload> {
        let service = ctx.data::<RestaurantService>()?;

        let payload = match service.find_restaurant_by_id(restaurant_id).await {
            Ok(restaurant) => RestaurantPayload::ok(restaurant),
            Err(e) => RestaurantPayload::err(&e),
        };
        Ok(payload)
    }

    /// Search restaurants by name, 25 per page
    async fn search_restaurant(
        &self,
        ctx: &Context<'_>,
        query: String,
        #[graphql(default = 1)] page: i32,
    ) -> Result<SearchRestaurantPayload> {
        let service = ctx.data::<RestaurantService>()?;
        let page = clamp_page(page);

        let payload = match service
            .search_restaurants(&query, PAGE_SIZE, page_offset(page))
            .await
        {
            Ok((restaurants, total)) => {
                SearchRestaurantPayload::ok(restaurants, total_pages(total), total)
            }
            Err(e) => SearchRestaurantPayload::err(&e),
        };
        Ok(payload)
    }

    /// List every category
    async fn all_categories(&self, ctx: &Context<'_>) -> Result<AllCategoriesPayload> {
        let service = ctx.data::<RestaurantService>()?;

        let payload = match service.all_categories().await {
            Ok(categories) => AllCategoriesPayload::ok(categories),
            Err(e) => AllCategoriesPayload::err(&e),
        };
        Ok(payload)
    }

    /// Get a category by slug along with one page of its restaurants
    async fn category(
        &self,
        ctx: &Context<'_>,
        slug: String,
        #[graphql(default = 1)] page: i32,
    ) -> Result<CategoryPayload> {
        let service = ctx.data::<RestaurantService>()?;
        let page = clamp_page(page);

        let payload = match service
            .find_category_by_slug(&slug, PAGE_SIZE, page_offset(page))
            .await
        {
            Ok((category, restaurants, total)) => {
                CategoryPayload::ok(category, restaurants, total_pages(total), total)
            }
            Err(e) => CategoryPayload::err(&e),
        };
        Ok(payload)
    }
}
