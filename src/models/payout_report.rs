//! Payout report models.
//!
//! This module contains the [`PayoutReport`] type and the per-location
//! snapshot that lets a location subset be re-aggregated without
//! re-parsing the upload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OwedShift;

/// Aggregated owed amounts for one employee.
///
/// # Example
///
/// ```
/// use timesheet_audit::models::EmployeeSummary;
/// use rust_decimal::Decimal;
///
/// let summary = EmployeeSummary {
///     employee: "Alice".to_string(),
///     total_owed: Decimal::new(435, 1),
///     shift_count: 2,
///     average_owed: Decimal::new(2175, 2),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee name.
    pub employee: String,
    /// Sum of the amount owed across the employee's owed shifts.
    pub total_owed: Decimal,
    /// Number of owed shifts.
    pub shift_count: usize,
    /// `total_owed / shift_count`.
    pub average_owed: Decimal,
}

/// Totals across every included owed shift.
///
/// The average is taken over shifts, not over the per-employee averages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTotals {
    /// Total amount owed.
    pub amount: Decimal,
    /// Number of owed shifts.
    pub shifts: usize,
    /// `amount / shifts`, zero when there are no shifts.
    pub average: Decimal,
}

impl PayoutTotals {
    /// Totals for an empty report.
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            shifts: 0,
            average: Decimal::ZERO,
        }
    }
}

/// The payout discrepancy report.
///
/// Summaries are ordered by employee name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutReport {
    /// One row per employee with at least one owed shift.
    pub summaries: Vec<EmployeeSummary>,
    /// Totals across all owed shifts.
    pub totals: PayoutTotals,
}

impl PayoutReport {
    /// A report with no rows.
    pub fn empty() -> Self {
        Self {
            summaries: Vec::new(),
            totals: PayoutTotals::zero(),
        }
    }
}

/// The owed-shift rows of an upload before any location filtering.
///
/// This is the stable intermediate for the per-location report: any
/// location selection is re-aggregated from `shifts` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPayoutSnapshot {
    /// Every owed shift, in upload order.
    pub shifts: Vec<OwedShift>,
    /// Distinct locations among `shifts`, sorted.
    pub locations: Vec<String>,
}

/// Response body for the per-location payout report.
///
/// Carries the full snapshot so a client can re-aggregate any other
/// location subset itself and reproduce the server totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPayoutReport {
    /// Unique identifier for this report.
    pub report_id: uuid::Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Every owed shift across all locations.
    pub shifts: Vec<OwedShift>,
    /// Distinct locations among `shifts`, sorted.
    pub locations: Vec<String>,
    /// The locations the summaries below were computed for.
    pub selected_locations: Vec<String>,
    /// Summaries restricted to `selected_locations`.
    pub summaries: Vec<EmployeeSummary>,
    /// Totals restricted to `selected_locations`.
    pub totals: PayoutTotals,
}
