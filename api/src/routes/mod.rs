//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/cpu` → latest cached sample
//! - `/data` → date-bounded historical query

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod metrics;

/// Builds the application router. The caller nests this under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .merge(metrics::metrics_routes())
        .with_state(app_state)
}
