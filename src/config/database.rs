use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use migration::{ItemsMigrator, MigratorTrait};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;
use crate::errors::internal::StoreError;

/// Handle on the item database
///
/// Cloning is cheap; the underlying pool is shared.
#[derive(Clone, Debug)]
pub struct DatabaseConnections {
    pub main: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to the database named in the settings
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    pub async fn init(bootstrap_settings: &BootstrapSettings) -> Result<Self, InternalError> {
        let database_url = bootstrap_settings.database_url();

        let main = Database::connect(database_url)
            .await
            .map_err(|e| InternalError::store("connect_database", e))?;

        tracing::debug!("Connected to item database: {}", database_url);

        Ok(Self { main })
    }

    /// Wrap an existing connection (used by tests and embedders)
    pub fn from_connection(main: DatabaseConnection) -> Self {
        Self { main }
    }

    pub async fn migrate(&self) -> Result<(), InternalError> {
        migrate_database(&self.main).await
    }

    /// Begin a transaction scoped to one store operation
    ///
    /// Dropping the returned transaction without committing rolls it back.
    pub async fn begin_transaction(&self) -> Result<DatabaseTransaction, InternalError> {
        let txn = self.main.begin().await
            .map_err(|source| StoreError::TransactionBegin { source })?;
        Ok(txn)
    }

    pub async fn commit_transaction(txn: DatabaseTransaction) -> Result<(), InternalError> {
        txn.commit().await
            .map_err(|source| StoreError::TransactionCommit { source })?;
        Ok(())
    }
}

/// Run all pending migrations on the item database
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    ItemsMigrator::up(db, None)
        .await
        .map_err(|e| InternalError::store("run_migrations", e))?;

    tracing::debug!("Item database migrations completed");

    Ok(())
}
