use db::cache::LatestSample;
use sea_orm::DatabaseConnection;

/// Shared application state handed to Axum route handlers.
///
/// Holds the pooled store connection and the single-slot cache that the
/// background sampler keeps up to date.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub latest: LatestSample,
}

impl AppState {
    pub fn new(db: DatabaseConnection, latest: LatestSample) -> Self {
        Self { db, latest }
    }
}
