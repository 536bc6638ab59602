use api::config::ApiConfig;
use api::middleware::log_request;
use api::routes::routes;
use api::services::sampler::spawn_sampler;
use api::state::AppState;
use axum::{Router, middleware::from_fn};
use db::cache::LatestSample;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let config = ApiConfig::init(".env");
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    // Connect to the store and bring the schema up to date
    let db = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to metrics store");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Spawn the minute-aligned background sampler
    let latest = LatestSample::new();
    spawn_sampler(latest.clone(), config.database_url.clone());

    let app_state = AppState::new(db, latest);

    // Build app router
    let cors = CorsLayer::very_permissive();
    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config.project_name, config.host, config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server crashed");
}

fn init_logging(
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
