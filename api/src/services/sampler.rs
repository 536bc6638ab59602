//! Background sampler: one synthetic sample per minute.
//!
//! The loop is anchored to wall-clock minute boundaries (fires at `:00`
//! seconds, like a `* * * * *` cron entry), not "every 60 seconds from
//! start". Each firing runs as its own task, so a slow store write never
//! shifts the cadence; firings may overlap, and the latest-sample cache
//! is last-write-wins by completion order.

use chrono::{DateTime, Timelike, Utc};
use db::cache::LatestSample;
use db::generator;
use std::time::Duration;

/// Spawns the minute-aligned sampling loop.
///
/// `database_url` is dialed fresh on every firing; a down store costs one
/// sample and a log line, never the schedule.
pub fn spawn_sampler(latest: LatestSample, database_url: String) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(delay_to_next_minute(Utc::now())).await;

            let latest = latest.clone();
            let url = database_url.clone();
            tokio::spawn(async move {
                fire(&latest, &url).await;
            });
        }
    });
}

/// One scheduler firing: generate, cache, persist.
///
/// Store failures are logged and the firing abandoned; the cache update
/// is not rolled back and the next firing proceeds as scheduled.
async fn fire(latest: &LatestSample, database_url: &str) {
    let sample = generator::generate();
    tracing::info!(
        timestamp = %sample.timestamp,
        cpu = sample.cpu_usage,
        ram = sample.ram_usage,
        temp = sample.temperature,
        storage = sample.storage_usage,
        "generated metrics sample"
    );

    latest.set(sample.clone());

    let db = match db::connect(database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::warn!("skipping persist, store unreachable: {e}");
            return;
        }
    };

    if let Err(e) = db::store::insert_sample(&db, sample).await {
        tracing::error!("failed to persist metrics sample: {e}");
    }
}

/// Time until the next wall-clock minute boundary.
fn delay_to_next_minute(now: DateTime<Utc>) -> Duration {
    let this_minute = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    let next_minute = this_minute + chrono::Duration::seconds(60);

    (next_minute - now).to_std().unwrap_or(Duration::ZERO)
}
