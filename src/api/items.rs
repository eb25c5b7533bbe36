use poem_openapi::{param::{Path, Query}, payload::Json, OpenApi, Tags};
use crate::coordinators::ItemCoordinator;
use crate::errors::ItemApiError;
use crate::types::dto::items::{
    CreateItemApiResponse, ItemApiResponse, ItemRequest, ListItemsApiResponse,
};
use std::sync::Arc;

/// Items API
pub struct ItemsApi {
    item_coordinator: Arc<ItemCoordinator>,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given ItemCoordinator
    pub fn new(item_coordinator: Arc<ItemCoordinator>) -> Self {
        Self { item_coordinator }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Accepts item details and returns the created item with generated ID and timestamp
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<ItemRequest>) -> CreateItemApiResponse {
        match self.item_coordinator.create_item(body.0).await {
            Ok(item) => CreateItemApiResponse::Created(Json(item)),
            Err(e) => ItemApiError::from_internal_error(e).into(),
        }
    }

    /// List items
    ///
    /// Returns items in creation order, skipping `skip` (default 0) and
    /// returning at most `limit` (default 10)
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        skip: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> ListItemsApiResponse {
        match self.item_coordinator.list_items(skip.0, limit.0).await {
            Ok(items) => ListItemsApiResponse::Ok(Json(items)),
            Err(e) => ItemApiError::from_internal_error(e).into(),
        }
    }

    /// Get a single item
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i32>) -> ItemApiResponse {
        match self.item_coordinator.get_item(id.0).await {
            Ok(item) => ItemApiResponse::Ok(Json(item)),
            Err(e) => ItemApiError::from_internal_error(e).into(),
        }
    }

    /// Replace the name and description of an item
    ///
    /// The item's id and creation timestamp are kept
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(&self, id: Path<i32>, body: Json<ItemRequest>) -> ItemApiResponse {
        match self.item_coordinator.update_item(id.0, body.0).await {
            Ok(item) => ItemApiResponse::Ok(Json(item)),
            Err(e) => ItemApiError::from_internal_error(e).into(),
        }
    }

    /// Delete an item
    ///
    /// Returns the item as it was right before deletion
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<i32>) -> ItemApiResponse {
        match self.item_coordinator.delete_item(id.0).await {
            Ok(item) => ItemApiResponse::Ok(Json(item)),
            Err(e) => ItemApiError::from_internal_error(e).into(),
        }
    }
}
