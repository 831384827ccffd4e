use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` when the service answers.
    pub status: String,
    /// Time of the check.
    pub timestamp: DateTime<Utc>,
    /// Crate version.
    pub version: String,
    /// Entries in the catalog.
    pub catalog_size: usize,
    /// Users with a saved timezone.
    pub registered_users: usize,
    /// Seconds since the state was built.
    pub uptime_seconds: u64,
}

/// Router for the health endpoints.
pub struct HealthService {
    /// Routes with state already attached.
    pub router: Router,
}

impl HealthService {
    /// Builds the health routes.
    pub fn new(state: AppState) -> Self {
        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    let uptime = now
        .signed_duration_since(state.start_time)
        .num_seconds()
        .max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now,
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        registered_users: state.registry.len(),
        uptime_seconds: uptime,
    })
}

async fn liveness_check() -> Json<&'static str> {
    // Simple liveness check - if this endpoint responds, the service is alive
    Json("alive")
}
