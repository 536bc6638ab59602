use axum::{Router, routing::get};

use crate::state::AppState;

pub mod get;

/// Builds the metrics read endpoints: `GET /cpu` (latest cached sample)
/// and `GET /data` (date-bounded history).
pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        .route("/cpu", get(get::get_latest))
        .route("/data", get(get::get_range))
}
