//! HTTP request handlers for the timesheet audit API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, Query, State,
        multipart::MultipartRejection,
        rejection::QueryRejection,
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::NameSet;
use crate::engine::{
    PAYOUT_COLUMNS, RECONCILIATION_KEY_COLUMNS, compute_location_snapshot, compute_payout_report,
    find_missed_shifts, sort_summaries, summarize_locations,
};
use crate::ingest::warn_missing_columns;
use crate::models::LocationPayoutReport;

use super::request::{PayoutQuery, UploadForm};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate_handler))
        .route("/api/calculate/locations", post(calculate_locations_handler))
        .route("/api/crossref", post(crossref_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Handler for POST /api/calculate.
///
/// Expects a `timesheets` CSV file and returns the whole-dataset payout
/// report. `?sort=` and `?order=` reorder the summary rows; unknown values
/// are rejected.
async fn calculate_handler(
    State(state): State<AppState>,
    query: Result<Query<PayoutQuery>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payout request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let error = ApiError::invalid_query(rejection.body_text());
            return reject(ApiErrorResponse::bad_request(error), correlation_id);
        }
    };

    let form = match read_form(multipart, correlation_id).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let records = match form.require_csv("timesheets") {
        Ok(records) => records,
        Err(err) => return reject(err.into(), correlation_id),
    };
    warn_missing_columns(&records, &PAYOUT_COLUMNS, "timesheets");

    let start_time = Instant::now();
    let mut report = compute_payout_report(&records, state.config().payout());
    sort_summaries(&mut report.summaries, query.sort, query.order);

    info!(
        correlation_id = %correlation_id,
        rows = records.len(),
        employees = report.summaries.len(),
        owed_shifts = report.totals.shifts,
        total_owed = %report.totals.amount,
        duration_us = start_time.elapsed().as_micros(),
        "Payout report completed"
    );
    json_ok(&report)
}

/// Handler for POST /api/calculate/locations.
///
/// Expects a `timesheets` CSV file and any number of `location` text
/// fields naming the locations to summarize. With no `location` field,
/// every location is selected.
async fn calculate_locations_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing per-location payout request");

    let form = match read_form(multipart, correlation_id).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let records = match form.require_csv("timesheets") {
        Ok(records) => records,
        Err(err) => return reject(err.into(), correlation_id),
    };
    warn_missing_columns(&records, &PAYOUT_COLUMNS, "timesheets");

    let snapshot = compute_location_snapshot(&records, state.config().payout());
    let requested = form.field_values("location");
    let selected_locations = if requested.is_empty() {
        snapshot.locations.clone()
    } else {
        requested
    };
    let report = summarize_locations(&snapshot, &NameSet::new(&selected_locations));

    info!(
        correlation_id = %correlation_id,
        locations = snapshot.locations.len(),
        selected = selected_locations.len(),
        owed_shifts = report.totals.shifts,
        "Per-location payout report completed"
    );

    json_ok(&LocationPayoutReport {
        report_id: correlation_id,
        generated_at: Utc::now(),
        shifts: snapshot.shifts,
        locations: snapshot.locations,
        selected_locations,
        summaries: report.summaries,
        totals: report.totals,
    })
}

/// Handler for POST /api/crossref.
///
/// Expects `scheduled` and `timesheets` CSV files and returns the
/// missed-shift report.
async fn crossref_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing missed-shift request");

    let form = match read_form(multipart, correlation_id).await {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    // Both fields are checked before either file is parsed.
    for field in ["scheduled", "timesheets"] {
        if let Err(err) = form.require_file(field) {
            return reject(err.into(), correlation_id);
        }
    }
    let scheduled = match form.require_csv("scheduled") {
        Ok(records) => records,
        Err(err) => return reject(err.into(), correlation_id),
    };
    let timesheets = match form.require_csv("timesheets") {
        Ok(records) => records,
        Err(err) => return reject(err.into(), correlation_id),
    };
    warn_missing_columns(&scheduled, &RECONCILIATION_KEY_COLUMNS, "scheduled");
    warn_missing_columns(&timesheets, &RECONCILIATION_KEY_COLUMNS, "timesheets");

    let start_time = Instant::now();
    let report = find_missed_shifts(&scheduled, &timesheets, state.config().reconciliation());

    info!(
        correlation_id = %correlation_id,
        scheduled_rows = scheduled.len(),
        timesheet_rows = timesheets.len(),
        missed = report.missed_count,
        employees = report.employees.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Missed-shift report completed"
    );
    json_ok(&report)
}

async fn read_form(
    multipart: Result<Multipart, MultipartRejection>,
    correlation_id: Uuid,
) -> Result<UploadForm, ApiErrorResponse> {
    let multipart = multipart.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Request is not multipart form data"
        );
        ApiErrorResponse::bad_request(ApiError::malformed_upload(rejection.body_text()))
    })?;

    UploadForm::from_multipart(multipart).await.map_err(|error| {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Failed to read multipart body"
        );
        ApiErrorResponse::bad_request(error)
    })
}

fn reject(error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %error.error.code,
        error = %error.error.message,
        "Rejected upload"
    );
    error.into_response()
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::config::ConfigLoader;
    use crate::models::{MissedShiftReport, PayoutReport};

    const BOUNDARY: &str = "audit-test-boundary";

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
    }

    fn multipart_body(files: &[(&str, &str, &str)], fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, file_name, content) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: text/csv\r\n\r\n{content}\r\n"
            ));
        }
        for (name, value) in fields {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    async fn post(uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(
                        "Content-Type",
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_calculate_returns_report() {
        let csv = "employee,location,tips,cost\nAlice,Fleming's Condo,$5.00,$20.00\n";
        let body = multipart_body(&[("timesheets", "t.csv", csv)], &[]);
        let (status, bytes) = post("/api/calculate", body).await;

        assert_eq!(status, StatusCode::OK);
        let report: PayoutReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.totals.amount, rust_decimal::Decimal::new(285, 1));
    }

    #[tokio::test]
    async fn test_calculate_missing_file_returns_400() {
        let body = multipart_body(&[], &[("note", "hello")]);
        let (status, bytes) = post("/api/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MISSING_FILE");
    }

    #[tokio::test]
    async fn test_non_multipart_body_returns_400() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_UPLOAD");
    }

    #[tokio::test]
    async fn test_calculate_rejects_unknown_sort_key() {
        let csv = "employee,location,tips,cost\nAlice,Downtown,$5.00,$20.00\n";
        let body = multipart_body(&[("timesheets", "t.csv", csv)], &[]);
        let (status, bytes) = post("/api/calculate?sort=bogus", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_calculate_without_query_uses_default_order() {
        let csv = "employee,location,tips,cost\nZoe,Downtown,0,$50.00\namy,Downtown,0,$1.00\n";
        let body = multipart_body(&[("timesheets", "t.csv", csv)], &[]);
        let (status, bytes) = post("/api/calculate", body).await;

        assert_eq!(status, StatusCode::OK);
        let report: PayoutReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report.summaries[0].employee, "amy");
    }

    #[tokio::test]
    async fn test_crossref_requires_both_files() {
        let csv = "employee,date,location\nA,2024-01-01,X\n";
        let body = multipart_body(&[("scheduled", "s.csv", csv)], &[]);
        let (status, bytes) = post("/api/crossref", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert!(error.message.contains("timesheets"));
    }

    #[tokio::test]
    async fn test_crossref_reports_missed_shift() {
        let scheduled = "employee,date,location\nA,2024-01-01,X\nA,2024-01-02,X\n";
        let timesheets = "employee,date,location\nA,2024-01-01,X\n";
        let body = multipart_body(
            &[
                ("scheduled", "s.csv", scheduled),
                ("timesheets", "t.csv", timesheets),
            ],
            &[],
        );
        let (status, bytes) = post("/api/crossref", body).await;

        assert_eq!(status, StatusCode::OK);
        let report: MissedShiftReport = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(report.missed_count, 1);
        assert_eq!(report.employees[0].shifts[0].date, "2024-01-02");
    }
}
