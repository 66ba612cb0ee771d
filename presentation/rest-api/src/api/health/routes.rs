use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::shared::clock::Clock;
use business::domain::shelf_life::catalog::ShelfLifeCatalog;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of entries in the loaded shelf-life table
    pub shelf_life_entries: usize,
}

/// Liveness probe for container orchestrators and load balancers.
pub struct HealthApi {
    clock: Arc<dyn Clock>,
    catalog: Arc<dyn ShelfLifeCatalog>,
}

impl HealthApi {
    pub fn new(clock: Arc<dyn Clock>, catalog: Arc<dyn ShelfLifeCatalog>) -> Self {
        Self { clock, catalog }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `shelf_life_entries`: Size of the reference table
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: self.clock.now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            shelf_life_entries: self.catalog.entries().len(),
        })
    }
}
