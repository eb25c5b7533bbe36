// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use std::sync::Arc;

use poem::Route;
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use crate::coordinators::ItemCoordinator;

/// Compose the HTTP routes: API under `/api`, Swagger UI under `/swagger`
///
/// # Arguments
/// * `app_data` - Shared stores and providers
/// * `server_url` - Public base URL advertised in the OpenAPI document
pub fn routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let item_coordinator = Arc::new(ItemCoordinator::new(app_data));

    let api_service = OpenApiService::new(
        (HealthApi::new(item_coordinator.clone()), ItemsApi::new(item_coordinator)),
        "Items API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
}
