use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::registry::UserTimezoneRegistry;

/// Request error kinds and their HTTP mapping
pub mod error;
/// Health and liveness endpoints
pub mod health;
/// Catalog, save and current-time endpoints
pub mod timezone;

use health::HealthService;
use timezone::TimezoneService;

/// Shared by every handler. Cloning is cheap; the registry is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Selectable timezones.
    pub catalog: Catalog,
    /// User choices.
    pub registry: Arc<UserTimezoneRegistry>,
    /// When the state was built, for uptime.
    pub start_time: DateTime<Utc>,
}

impl AppState {
    /// State starting its uptime clock now.
    pub fn new(catalog: Catalog, registry: Arc<UserTimezoneRegistry>) -> Self {
        Self {
            catalog,
            registry,
            start_time: Utc::now(),
        }
    }
}

/// The full HTTP surface: timezone endpoints, health endpoints and request tracing.
pub fn app(state: AppState) -> Router {
    TimezoneService::new(state.clone())
        .router
        .merge(HealthService::new(state).router)
        .layer(TraceLayer::new_for_http())
}
