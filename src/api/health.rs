use poem_openapi::{payload::Json, ApiResponse, OpenApi, Tags};
use crate::coordinators::ItemCoordinator;
use crate::errors::api::items::{internal_error_body, ItemErrorResponse};
use crate::types::dto::common::HealthResponse;
use chrono::Utc;
use std::sync::Arc;

/// Health check API
pub struct HealthApi {
    item_coordinator: Arc<ItemCoordinator>,
}

impl HealthApi {
    pub fn new(item_coordinator: Arc<ItemCoordinator>) -> Self {
        Self { item_coordinator }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

/// API response for the health endpoint
#[derive(ApiResponse)]
pub enum HealthApiResponse {
    /// Service and store are reachable
    #[oai(status = 200)]
    Ok(Json<HealthResponse>),

    /// Store could not be queried
    #[oai(status = 500)]
    Unavailable(Json<ItemErrorResponse>),
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the API service and the number of stored items
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> HealthApiResponse {
        match self.item_coordinator.count_items().await {
            Ok(item_count) => HealthApiResponse::Ok(Json(HealthResponse {
                status: "healthy".to_string(),
                timestamp: Utc::now().to_rfc3339(),
                item_count,
            })),
            Err(e) => {
                tracing::error!("Health check failed: {}", e);
                HealthApiResponse::Unavailable(Json(internal_error_body()))
            }
        }
    }
}
