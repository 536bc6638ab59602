pub mod cache;
pub mod generator;
pub mod models;
pub mod store;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

use crate::store::StoreError;

/// Connects to the metrics store at the given URL.
///
/// Accepts either a full DSN or a bare SQLite file path. File-backed SQLite
/// URLs without options get `mode=rwc` so the database file is created on
/// first use (SQLite won't create intermediate directories, so the parent
/// is created first).
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, StoreError> {
    let url = if let Some(rest) = path_or_url.strip_prefix("sqlite://") {
        if rest == ":memory:" || path_or_url.contains('?') {
            path_or_url.to_string()
        } else {
            ensure_parent_dir(rest);
            format!("{path_or_url}?mode=rwc")
        }
    } else if path_or_url.contains("://") || path_or_url.starts_with("sqlite:") {
        path_or_url.to_string()
    } else {
        ensure_parent_dir(path_or_url);
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url).await.map_err(StoreError::Connection)
}

fn ensure_parent_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}
