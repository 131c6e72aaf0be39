//! Performance benchmarks for the timesheet audit engine.
//!
//! Covers the payout pipeline, per-location re-aggregation, missed-shift
//! reconciliation and a full multipart round trip through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use timesheet_audit::api::{AppState, create_router};
use timesheet_audit::config::{ConfigLoader, NameSet, PayoutConfig, ReconciliationConfig};
use timesheet_audit::engine::{
    compute_location_snapshot, compute_payout_report, find_missed_shifts, summarize_locations,
};
use timesheet_audit::models::RawRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const EMPLOYEES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Troy",
];
const LOCATIONS: [&str; 5] = ["Downtown", "Fleming's Condo", "Haven", "Uptown", "Harbor"];
const BOUNDARY: &str = "bench-boundary";

/// Generates timesheet rows; roughly two thirds of them are owed.
fn timesheet_rows(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let tips = format!("${}.00", (i * 7) % 60);
            let cost = format!("${}.50", (i * 11) % 80);
            RawRecord::from_pairs([
                ("Employee", EMPLOYEES[i % EMPLOYEES.len()].to_string()),
                ("Date", format!("2024-01-{:02}", i % 28 + 1)),
                ("Location", LOCATIONS[i % LOCATIONS.len()].to_string()),
                ("Tips", tips),
                ("Cost", cost),
            ])
        })
        .collect()
}

fn timesheet_csv(count: usize) -> String {
    let mut csv = String::from("Employee,Date,Location,Tips,Cost\n");
    for i in 0..count {
        csv.push_str(&format!(
            "{},2024-01-{:02},{},${}.00,${}.50\n",
            EMPLOYEES[i % EMPLOYEES.len()],
            i % 28 + 1,
            LOCATIONS[i % LOCATIONS.len()],
            (i * 7) % 60,
            (i * 11) % 80,
        ));
    }
    csv
}

fn multipart_body(csv: &str) -> String {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"timesheets\"; filename=\"timesheets.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n--{BOUNDARY}--\r\n"
    )
}

/// Benchmark: whole-dataset payout report at increasing upload sizes.
fn bench_payout_scaling(c: &mut Criterion) {
    let config = PayoutConfig::default();
    let mut group = c.benchmark_group("payout_scaling");

    for row_count in [100usize, 1_000, 10_000].iter() {
        let rows = timesheet_rows(*row_count);
        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(row_count), &rows, |b, rows| {
            b.iter(|| black_box(compute_payout_report(rows, &config)))
        });
    }

    group.finish();
}

/// Benchmark: re-aggregating a snapshot versus recomputing it.
fn bench_location_reaggregation(c: &mut Criterion) {
    let config = PayoutConfig::default();
    let rows = timesheet_rows(5_000);
    let snapshot = compute_location_snapshot(&rows, &config);
    let selected = NameSet::new(["Downtown", "Uptown"]);

    let mut group = c.benchmark_group("location_reaggregation");
    group.bench_function("from_snapshot", |b| {
        b.iter(|| black_box(summarize_locations(&snapshot, &selected)))
    });
    group.bench_function("from_scratch", |b| {
        b.iter(|| {
            let snapshot = compute_location_snapshot(&rows, &config);
            black_box(summarize_locations(&snapshot, &selected))
        })
    });
    group.finish();
}

/// Benchmark: reconciling a schedule against timesheets covering half of it.
fn bench_reconciliation(c: &mut Criterion) {
    let config = ReconciliationConfig::default();
    let mut group = c.benchmark_group("reconciliation");

    for row_count in [1_000usize, 10_000].iter() {
        let scheduled = timesheet_rows(*row_count);
        let worked: Vec<RawRecord> = scheduled.iter().step_by(2).cloned().collect();
        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            &(scheduled, worked),
            |b, (scheduled, worked)| b.iter(|| black_box(find_missed_shifts(scheduled, worked, &config))),
        );
    }

    group.finish();
}

/// Benchmark: full upload round trip through `/api/calculate`.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default.yaml").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = multipart_body(&timesheet_csv(1_000));

    let mut group = c.benchmark_group("calculate_endpoint");
    group.throughput(Throughput::Elements(1_000));
    group.sample_size(20);
    group.bench_function("upload_1000_rows", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/calculate")
                        .header(
                            "Content-Type",
                            format!("multipart/form-data; boundary={BOUNDARY}"),
                        )
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_payout_scaling,
    bench_location_reaggregation,
    bench_reconciliation,
    bench_calculate_endpoint,
);
criterion_main!(benches);
