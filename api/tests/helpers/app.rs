use api::{routes::routes, state::AppState};
use axum::Router;
use db::{cache::LatestSample, test_utils::setup_test_db};

/// Router over a fresh in-memory store, plus the state handle so tests can
/// seed rows and the latest-sample cache directly.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db, LatestSample::new());

    let router = Router::new().nest("/api", routes(app_state.clone()));
    (router, app_state)
}
