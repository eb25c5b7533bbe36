use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::InternalError;
use crate::providers::ItemValidatorProvider;
use crate::stores::ItemStore;
use crate::types::dto::items::{ItemRequest, ItemResponse};

/// Orchestrates the item lifecycle: one endpoint, one store operation
///
/// Every flow validates before touching the store, runs the store call inside
/// its own transaction and commits only on success. Any early return drops
/// the transaction, which rolls it back.
pub struct ItemCoordinator {
    connections: DatabaseConnections,
    item_store: Arc<ItemStore>,
    validator: Arc<ItemValidatorProvider>,
}

impl ItemCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            connections: app_data.connections.clone(),
            item_store: Arc::clone(&app_data.item_store),
            validator: Arc::clone(&app_data.item_validator),
        }
    }

    pub async fn create_item(&self, request: ItemRequest) -> Result<ItemResponse, InternalError> {
        let input = self.validator.validate_input(request)?;

        let txn = self.connections.begin_transaction().await?;
        let created = self.item_store.create(&txn, input).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::debug!("Item {} created", created.id);

        Ok(ItemResponse::try_from(created)?)
    }

    pub async fn list_items(
        &self,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<ItemResponse>, InternalError> {
        let window = self.validator.page_window(skip, limit)?;

        // One transaction so the page is read from a single snapshot
        let txn = self.connections.begin_transaction().await?;
        let items = self.item_store.list(&txn, window).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::debug!(
            "Listed {} items (skip={}, limit={})",
            items.len(),
            window.skip,
            window.limit
        );

        items
            .into_iter()
            .map(|item| ItemResponse::try_from(item).map_err(InternalError::from))
            .collect()
    }

    pub async fn get_item(&self, id: i32) -> Result<ItemResponse, InternalError> {
        let txn = self.connections.begin_transaction().await?;
        let found = self.item_store.get(&txn, id).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        match found {
            Some(item) => Ok(ItemResponse::try_from(item)?),
            None => {
                tracing::debug!("Item {} not found", id);
                Err(InternalError::not_found(id))
            }
        }
    }

    pub async fn update_item(
        &self,
        id: i32,
        request: ItemRequest,
    ) -> Result<ItemResponse, InternalError> {
        let input = self.validator.validate_input(request)?;

        let txn = self.connections.begin_transaction().await?;
        let Some(updated) = self.item_store.replace(&txn, id, input).await? else {
            tracing::debug!("Item {} not found for update", id);
            return Err(InternalError::not_found(id));
        };
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::debug!("Item {} updated", id);

        Ok(ItemResponse::try_from(updated)?)
    }

    /// Returns the item as it was right before removal
    pub async fn delete_item(&self, id: i32) -> Result<ItemResponse, InternalError> {
        let txn = self.connections.begin_transaction().await?;
        let Some(removed) = self.item_store.delete(&txn, id).await? else {
            tracing::debug!("Item {} not found for delete", id);
            return Err(InternalError::not_found(id));
        };
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::debug!("Item {} deleted", id);

        Ok(ItemResponse::try_from(removed)?)
    }

    pub async fn count_items(&self) -> Result<u64, InternalError> {
        self.item_store.count(&self.connections.main).await
    }
}
