use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use db::store;
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub startdate: Option<String>,
    pub enddate: Option<String>,
}

/// GET /api/cpu
///
/// Returns the most recent generated sample from the in-process cache.
///
/// ### Responses
/// - `200 OK`: the sample as a bare JSON object
///   (`timestamp`, `cpuUsage`, `ramUsage`, `temperature`, `storageUsage`)
/// - `404 Not Found`: plain-text `No data available` when no scheduler
///   firing has happened yet. An empty cache is a defined state, not an
///   error.
pub async fn get_latest(State(app_state): State<AppState>) -> Response {
    match app_state.latest.get() {
        Some(sample) => Json(sample).into_response(),
        None => (StatusCode::NOT_FOUND, "No data available").into_response(),
    }
}

/// GET /api/data?startdate=YYYY-MM-DD&enddate=YYYY-MM-DD
///
/// Returns all persisted samples within the resolved day bounds, ascending
/// by timestamp, as a bare JSON array (possibly empty).
///
/// ### Query Parameters
/// - `startdate` (optional): calendar date; defaults to today.
/// - `enddate` (optional): calendar date; defaults to the start date.
///
/// The window always spans whole days: 00:00:00.000 of the start date
/// through 23:59:59.999 of the end date, both inclusive.
///
/// ### Responses
/// - `200 OK`: ordered array of samples
/// - `400 Bad Request`: malformed date
/// - `500 Internal Server Error`: store failure
pub async fn get_range(
    State(app_state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> Response {
    let start = match parse_date(params.startdate.as_deref()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };
    let end = match parse_date(params.enddate.as_deref()) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let (start, end) = resolve_bounds(start, end, Utc::now().date_naive());

    match store::query_range(&app_state.db, start, end).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::error!("range query failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error("Failed to query metrics")),
            )
                .into_response()
        }
    }
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, Response> {
    match value {
        None => Ok(None),
        Some(s) => s.parse::<NaiveDate>().map(Some).map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(format!("Invalid date '{s}': {e}"))),
            )
                .into_response()
        }),
    }
}

/// Resolves optional calendar dates to an inclusive timestamp window.
///
/// A missing start date means "today"; a missing end date means the end of
/// the resolved start day, so `?startdate=X` alone covers exactly day X.
fn resolve_bounds(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_day = start.unwrap_or(today);
    let end_day = end.unwrap_or(start_day);

    (
        start_day.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        end_day.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn explicit_start_and_end_cover_whole_days() {
        let (start, end) = resolve_bounds(
            Some(date("2024-01-01")),
            Some(date("2024-01-01")),
            date("2030-06-15"),
        );
        assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-01-01T23:59:59.999+00:00");
    }

    #[test]
    fn missing_start_defaults_to_today() {
        let today = date("2024-03-10");
        let (start, end) = resolve_bounds(None, None, today);
        assert_eq!(start.date_naive(), today);
        assert_eq!(end.date_naive(), today);
    }

    #[test]
    fn missing_end_defaults_to_the_start_day() {
        let (start, end) = resolve_bounds(Some(date("2024-01-05")), None, date("2030-06-15"));
        assert_eq!(start.date_naive(), date("2024-01-05"));
        assert_eq!(end.date_naive(), date("2024-01-05"));
    }

    #[test]
    fn end_date_may_extend_the_window() {
        let (start, end) = resolve_bounds(
            Some(date("2024-01-01")),
            Some(date("2024-01-31")),
            date("2030-06-15"),
        );
        assert_eq!(start.date_naive(), date("2024-01-01"));
        assert_eq!(end.to_rfc3339(), "2024-01-31T23:59:59.999+00:00");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(parse_date(Some("not-a-date")).is_err());
        assert!(parse_date(Some("2024-13-40")).is_err());
        assert!(parse_date(None).unwrap().is_none());
        assert_eq!(parse_date(Some("2024-01-01")).unwrap(), Some(date("2024-01-01")));
    }
}
