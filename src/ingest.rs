//! CSV ingest.
//!
//! Turns uploaded or on-disk CSV text into [`RawRecord`]s keyed by the
//! header row, and finds the newest export in a directory for the CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::engine::normalize;
use crate::error::{AuditError, AuditResult};
use crate::models::{RawRecord, RawValue};

/// Default filename prefix of the timesheet export used by the payout report.
pub const PAYOUT_FILE_PREFIX: &str = "Report - timesheets - ";
/// Default filename prefix of the scheduled-hours export.
pub const SCHEDULED_FILE_PREFIX: &str = "report - scheduled-hours";
/// Default filename prefix of the timesheet export used by reconciliation.
pub const TIMESHEET_FILE_PREFIX: &str = "report - timesheets";

/// Parses uploaded bytes as CSV.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn parse_csv_bytes(bytes: &[u8], source_name: &str) -> AuditResult<Vec<RawRecord>> {
    parse_csv(&String::from_utf8_lossy(bytes), source_name)
}

/// Parses CSV text into records keyed by the header row.
///
/// Short rows get [`RawValue::Missing`] for their absent columns; cells
/// beyond the header are dropped. Rows where every cell is blank are
/// skipped.
///
/// # Example
///
/// ```
/// use timesheet_audit::ingest::parse_csv;
///
/// let records = parse_csv("Employee,Tips\nAlice,$5\n", "timesheets")?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), timesheet_audit::error::AuditError>(())
/// ```
pub fn parse_csv(text: &str, source_name: &str) -> AuditResult<Vec<RawRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let to_error = |e: csv::Error| AuditError::CsvParse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(to_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(to_error)?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut record = RawRecord::new();
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).map_or(RawValue::Missing, RawValue::from);
            record.push(header.clone(), value);
        }
        records.push(record);
    }

    debug!(
        source = source_name,
        columns = headers.len(),
        rows = records.len(),
        "Parsed CSV"
    );
    Ok(records)
}

/// Reads and parses a CSV file.
pub fn read_csv_file(path: &Path) -> AuditResult<Vec<RawRecord>> {
    let bytes = fs::read(path).map_err(|source| AuditError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv_bytes(&bytes, &path.display().to_string())
}

/// Returns the expected columns the first record does not carry.
///
/// An empty upload reports nothing missing. The engine tolerates missing
/// columns; this exists so callers can warn about them.
pub fn missing_columns(records: &[RawRecord], expected: &[&str]) -> Vec<String> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let record = normalize(first);
    expected
        .iter()
        .filter(|column| !record.has_field(column))
        .map(|column| column.to_string())
        .collect()
}

/// Logs a warning when an upload lacks expected columns.
pub fn warn_missing_columns(records: &[RawRecord], expected: &[&str], source_name: &str) {
    let missing = missing_columns(records, expected);
    if !missing.is_empty() {
        warn!(
            source = source_name,
            missing = ?missing,
            "CSV is missing expected columns; affected fields read as blank"
        );
    }
}

/// Finds the most recently modified `.csv` file in `dir` whose name starts
/// with `prefix`. Both checks ignore case.
pub fn find_latest_csv_by_prefix(dir: &Path, prefix: &str) -> AuditResult<PathBuf> {
    let prefix_lower = prefix.to_lowercase();
    let io_error = |source| AuditError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !name.starts_with(&prefix_lower) || !name.ends_with(".csv") {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(io_error)?;
        if latest.as_ref().is_none_or(|(newest, _)| modified >= *newest) {
            latest = Some((modified, entry.path()));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| AuditError::NoMatchingFile {
            prefix: prefix.to_string(),
        })
}
