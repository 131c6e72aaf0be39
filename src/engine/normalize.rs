//! Record normalization.
//!
//! Field names are trimmed and lower-cased; values are rendered to text and
//! trimmed. Nothing is validated here.

use std::collections::HashMap;

use crate::models::{NormalizedRecord, RawRecord};

/// Normalizes a raw CSV record.
///
/// Every raw field is carried over. When two raw columns fold to the same
/// name, the later column wins. The operation is idempotent.
///
/// # Example
///
/// ```
/// use timesheet_audit::engine::normalize;
/// use timesheet_audit::models::RawRecord;
///
/// let record = normalize(&RawRecord::from_pairs([(" Employee ", "  Alice ")]));
/// assert_eq!(record.get("employee"), "Alice");
/// ```
pub fn normalize(raw: &RawRecord) -> NormalizedRecord {
    let fields: HashMap<String, String> = raw
        .iter()
        .map(|(key, value)| (key.trim().to_lowercase(), value.to_string().trim().to_string()))
        .collect();
    NormalizedRecord::from_fields(fields)
}

/// Normalizes every record of an upload, preserving order.
pub fn normalize_all(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize).collect()
}
