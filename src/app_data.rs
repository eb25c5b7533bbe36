use std::sync::Arc;

use crate::config::{BootstrapSettings, DatabaseConnections};
use crate::providers::ItemValidatorProvider;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across coordinators.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ├─ connections (DatabaseConnections)
///   ├─ item_store (Arc<ItemStore>)
///   └─ item_validator (Arc<ItemValidatorProvider>)
///   ↓ wrapped in Arc<AppData>
///   └─ ItemCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub item_store: Arc<ItemStore>,
    pub item_validator: Arc<ItemValidatorProvider>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be initialized and migrated before calling this.
    pub fn init(connections: DatabaseConnections, settings: &BootstrapSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let item_store = Arc::new(ItemStore::new());
        let item_validator = Arc::new(ItemValidatorProvider::new(settings.reject_empty_name()));

        tracing::debug!(
            "Empty item names are {}",
            if item_validator.rejects_empty_name() { "rejected" } else { "accepted" }
        );
        tracing::info!("AppData initialization complete");

        Self {
            connections,
            item_store,
            item_validator,
        }
    }
}
