//! Missed-shift reconciliation models.

use serde::{Deserialize, Serialize};

use super::NormalizedRecord;

/// The `(employee, date, location)` triple that matches a scheduled shift
/// to a timesheet entry.
///
/// Values are compared verbatim after normalization, so `2024-01-01` and
/// `01/01/2024` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReconciliationKey {
    /// The employee name.
    pub employee: String,
    /// The shift date as written in the file.
    pub date: String,
    /// The location name.
    pub location: String,
}

impl ReconciliationKey {
    /// Extracts the key from a record, or `None` when any of the three
    /// fields is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_audit::engine::normalize;
    /// use timesheet_audit::models::{RawRecord, ReconciliationKey};
    ///
    /// let full = normalize(&RawRecord::from_pairs([
    ///     ("Employee", "A"), ("Date", "2024-01-01"), ("Location", "X"),
    /// ]));
    /// assert!(ReconciliationKey::from_record(&full).is_some());
    ///
    /// let partial = normalize(&RawRecord::from_pairs([("Employee", "A"), ("Date", "")]));
    /// assert!(ReconciliationKey::from_record(&partial).is_none());
    /// ```
    pub fn from_record(record: &NormalizedRecord) -> Option<Self> {
        let employee = record.get("employee");
        let date = record.get("date");
        let location = record.get("location");
        if employee.is_empty() || date.is_empty() || location.is_empty() {
            return None;
        }
        Some(Self {
            employee: employee.to_string(),
            date: date.to_string(),
            location: location.to_string(),
        })
    }
}

/// A scheduled shift with no matching timesheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedShift {
    /// The scheduled date.
    pub date: String,
    /// The scheduled location.
    pub location: String,
    /// Scheduled start time, when the schedule file has start and end columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Scheduled end time, when the schedule file has start and end columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// All missed shifts for one employee, in schedule-file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMissedShifts {
    /// The employee name.
    pub employee: String,
    /// The missed shifts.
    pub shifts: Vec<MissedShift>,
}

/// The missed-shift report.
///
/// An empty `employees` list is a normal outcome: either every scheduled
/// shift was worked or nothing was scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedShiftReport {
    /// Total number of missed shifts across all employees.
    pub missed_count: usize,
    /// Missed shifts grouped by employee, ordered by employee name.
    pub employees: Vec<EmployeeMissedShifts>,
    /// Whether the schedule file had both start and end columns.
    pub has_scheduled_times: bool,
}

impl MissedShiftReport {
    /// Returns true when no scheduled shift was missed.
    pub fn is_clean(&self) -> bool {
        self.missed_count == 0
    }
}
