use std::sync::Arc;

use clap::Parser;
use items_backend::api;
use items_backend::cli::{self, Cli, Commands};
use items_backend::config::{init_logging, BootstrapSettings, DatabaseConnections};
use items_backend::AppData;
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    if cli.selected_command() == &Commands::Migrate {
        return cli::migrate::run_migrations(&settings).await;
    }

    let connections = DatabaseConnections::init(&settings).await?;
    connections.migrate().await?;

    let app_data = Arc::new(AppData::init(connections, &settings));

    let server_url = format!("http://localhost:{}/api", settings.server_port());
    let app = api::routes(app_data, &server_url);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", settings.server_port());
    tracing::info!("API endpoints available at {}", server_url);

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await?;

    Ok(())
}
