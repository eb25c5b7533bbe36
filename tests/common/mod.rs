// Common test utilities for integration tests

use std::path::Path;
use std::sync::Arc;

use items_backend::AppData;
use items_backend::config::DatabaseConnections;
use items_backend::providers::ItemValidatorProvider;
use items_backend::stores::ItemStore;
use migration::{ItemsMigrator, MigratorTrait};
use poem::Route;
use sea_orm::{Database, DatabaseConnection};

/// Creates a test item database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    connect_migrated("sqlite::memory:").await
}

async fn connect_migrated(url: &str) -> DatabaseConnection {
    let db = Database::connect(url)
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

/// Creates AppData over a fresh SQLite file inside `dir`
///
/// In-memory SQLite is pinned to a single pooled connection, so tests that
/// need transactions to actually overlap use a file database instead.
#[allow(dead_code)]
pub async fn setup_file_app_data(dir: &Path) -> Arc<AppData> {
    let url = format!("sqlite://{}?mode=rwc", dir.join("items.db").display());
    let db = connect_migrated(&url).await;

    Arc::new(AppData {
        connections: DatabaseConnections::from_connection(db),
        item_store: Arc::new(ItemStore::new()),
        item_validator: Arc::new(ItemValidatorProvider::new(true)),
    })
}

/// Full HTTP route tree over a fresh in-memory database
pub async fn setup_test_routes(reject_empty_name: bool) -> Route {
    let app_data = setup_test_app_data(reject_empty_name).await;
    items_backend::api::routes(app_data, "http://localhost:3000/api")
}
