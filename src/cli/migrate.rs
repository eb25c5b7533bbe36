use crate::config::{BootstrapSettings, DatabaseConnections};

/// Run database migrations
///
/// Connects to the item database and runs all pending migrations.
/// It does not initialize the full AppData structure.
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(...)` - Connection or migration failed
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let connections = DatabaseConnections::init(settings).await?;
    connections.migrate().await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
