use std::{env, fs, path::Path};

mod runner;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&url);
        }
        Some("fresh") => {
            remove_db_file(&url);
            create_db_dir(&url);
            runner::run_all_migrations(&connect_url(&url)).await;
        }
        _ => {
            create_db_dir(&url);
            runner::run_all_migrations(&connect_url(&url)).await;
        }
    }
}

/// SQLite will not create the database file unless asked to; add `mode=rwc`
/// when the URL does not already carry options.
fn connect_url(url: &str) -> String {
    if sqlite_file_path(url).is_some() && !url.contains('?') {
        format!("{url}?mode=rwc")
    } else {
        url.to_string()
    }
}

/// Extracts the on-disk file path from a `sqlite://...` URL, if any.
fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite://")?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(path)
    }
}

fn remove_db_file(url: &str) {
    let Some(path) = sqlite_file_path(url) else {
        println!("Not a file-backed database, nothing to clean: {url}");
        return;
    };
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(url: &str) {
    if let Some(path) = sqlite_file_path(url) {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).expect("Failed to create DB directory");
        }
    }
}
