// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{ItemsMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::providers::ItemValidatorProvider;
use crate::stores::ItemStore;

/// Creates an in-memory item database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemsMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates AppData over a fresh in-memory database
pub async fn setup_test_app_data(reject_empty_name: bool) -> Arc<AppData> {
    let db = setup_test_db().await;

    Arc::new(AppData {
        connections: DatabaseConnections::from_connection(db),
        item_store: Arc::new(ItemStore::new()),
        item_validator: Arc::new(ItemValidatorProvider::new(reject_empty_name)),
    })
}
