use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use db::generator::{self, Sample};
use db::store;
use serde_json::Value;
use tower::ServiceExt;

use crate::helpers::app::make_test_app;

fn at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.3f")
        .expect("bad test timestamp")
        .and_utc()
}

fn sample_at(ts: DateTime<Utc>, cpu: f64) -> Sample {
    Sample {
        timestamp: ts,
        cpu_usage: cpu,
        ram_usage: 50.5,
        temperature: 22.0,
        storage_usage: 61.3,
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn cpu_returns_404_plain_text_before_any_firing() {
    let (app, _state) = make_test_app().await;

    let (status, body) = get(app, "/api/cpu").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"No data available");
}

#[tokio::test]
async fn cpu_returns_the_cached_sample_as_camel_case_json() {
    let (app, state) = make_test_app().await;
    let sample = generator::generate();
    state.latest.set(sample.clone());

    let (status, body) = get(app, "/api/cpu").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["cpuUsage"], sample.cpu_usage);
    assert_eq!(json["ramUsage"], sample.ram_usage);
    assert_eq!(json["temperature"], sample.temperature);
    assert_eq!(json["storageUsage"], sample.storage_usage);
    assert!(json.get("id").is_none());
}

#[tokio::test]
async fn data_returns_only_the_requested_day_in_ascending_order() {
    let (app, state) = make_test_app().await;

    // Inserted out of order, with neighbors just outside the window.
    for (ts, cpu) in [
        ("2024-01-01 18:00:00.000", 2.0),
        ("2023-12-31 23:59:59.999", 9.0),
        ("2024-01-01 06:00:00.000", 1.0),
        ("2024-01-02 00:00:00.000", 9.0),
    ] {
        store::insert_sample(&state.db, sample_at(at(ts), cpu))
            .await
            .unwrap();
    }

    let (status, body) = get(app, "/api/data?startdate=2024-01-01&enddate=2024-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let rows = json.as_array().unwrap();
    let cpus: Vec<f64> = rows.iter().map(|r| r["cpuUsage"].as_f64().unwrap()).collect();
    assert_eq!(cpus, vec![1.0, 2.0]);
}

#[tokio::test]
async fn data_window_bounds_are_inclusive() {
    let (app, state) = make_test_app().await;
    store::insert_sample(&state.db, sample_at(at("2024-01-01 00:00:00.000"), 1.0))
        .await
        .unwrap();
    store::insert_sample(&state.db, sample_at(at("2024-01-01 23:59:59.999"), 2.0))
        .await
        .unwrap();

    let (status, body) = get(app, "/api/data?startdate=2024-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn data_defaults_to_the_current_day() {
    let (app, state) = make_test_app().await;
    let now = Utc::now();
    store::insert_sample(&state.db, sample_at(now, 1.0)).await.unwrap();
    store::insert_sample(&state.db, sample_at(now - Duration::days(2), 2.0))
        .await
        .unwrap();

    let (status, body) = get(app, "/api/data").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["cpuUsage"], 1.0);
}

#[tokio::test]
async fn data_with_no_matches_is_an_empty_array() {
    let (app, _state) = make_test_app().await;

    let (status, body) = get(app, "/api/data?startdate=1999-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn data_rejects_malformed_dates() {
    let (app, _state) = make_test_app().await;

    let (status, body) = get(app, "/api/data?startdate=not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
}
