//! Missed-shift reconciliation.
//!
//! Scheduled shifts are anti-joined against timesheets on the
//! `(employee, date, location)` key. A scheduled shift whose key never
//! appears in the timesheets is reported as missed.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::ReconciliationConfig;
use crate::models::{
    EmployeeMissedShifts, MissedShift, MissedShiftReport, NormalizedRecord, RawRecord,
    ReconciliationKey,
};

use super::columns::{END_TIME_ALIASES, START_TIME_ALIASES, find_first_column};
use super::normalize::normalize_all;
use super::sorting::NameCollator;

/// Columns both reconciliation files must carry.
pub const RECONCILIATION_KEY_COLUMNS: [&str; 3] = ["employee", "date", "location"];

/// The start/end columns detected on a schedule file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTimeColumns {
    /// The matched start-time column, if any.
    pub start: Option<&'static str>,
    /// The matched end-time column, if any.
    pub end: Option<&'static str>,
}

impl ScheduleTimeColumns {
    /// Probes a record for start/end columns.
    pub fn detect(record: &NormalizedRecord) -> Self {
        Self {
            start: find_first_column(&START_TIME_ALIASES, |name| record.has_field(name)),
            end: find_first_column(&END_TIME_ALIASES, |name| record.has_field(name)),
        }
    }

    /// Both columns, when both were found.
    pub fn both(&self) -> Option<(&'static str, &'static str)> {
        self.start.zip(self.end)
    }
}

/// Finds scheduled shifts with no matching timesheet entry.
///
/// Both files are filtered by the configured ignore lists (case-insensitive;
/// a blank employee or location is never treated as ignored). Rows missing
/// any key field are skipped: such timesheet rows match nothing and such
/// scheduled rows are never reported.
///
/// Duplicate scheduled rows are reported once per row.
pub fn find_missed_shifts(
    scheduled: &[RawRecord],
    timesheets: &[RawRecord],
    config: &ReconciliationConfig,
) -> MissedShiftReport {
    let scheduled: Vec<NormalizedRecord> = normalize_all(scheduled)
        .into_iter()
        .filter(|record| !is_ignored(record, config))
        .collect();
    let timesheets: Vec<NormalizedRecord> = normalize_all(timesheets)
        .into_iter()
        .filter(|record| !is_ignored(record, config))
        .collect();

    let columns = scheduled
        .first()
        .map(ScheduleTimeColumns::detect)
        .unwrap_or_default();
    let times = columns.both();

    let worked: HashSet<ReconciliationKey> = timesheets
        .iter()
        .filter_map(ReconciliationKey::from_record)
        .collect();

    let mut employees: Vec<EmployeeMissedShifts> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut missed_count = 0;

    for record in &scheduled {
        let Some(key) = ReconciliationKey::from_record(record) else {
            continue;
        };
        if worked.contains(&key) {
            continue;
        }

        let shift = MissedShift {
            date: key.date,
            location: key.location,
            start: times.map(|(start, _)| record.get(start).to_string()),
            end: times.map(|(_, end)| record.get(end).to_string()),
        };

        let index = *positions.entry(key.employee.clone()).or_insert_with(|| {
            employees.push(EmployeeMissedShifts {
                employee: key.employee,
                shifts: Vec::new(),
            });
            employees.len() - 1
        });
        employees[index].shifts.push(shift);
        missed_count += 1;
    }

    // Stable sort keeps schedule order within each employee.
    let mut collator = NameCollator::new();
    employees.sort_by(|a, b| collator.compare(&a.employee, &b.employee));

    debug!(
        scheduled = scheduled.len(),
        timesheets = timesheets.len(),
        worked_keys = worked.len(),
        missed = missed_count,
        "Reconciled scheduled shifts against timesheets"
    );

    MissedShiftReport {
        missed_count,
        employees,
        has_scheduled_times: times.is_some(),
    }
}

fn is_ignored(record: &NormalizedRecord, config: &ReconciliationConfig) -> bool {
    let employee = record.get("employee");
    let location = record.get("location");
    (!employee.is_empty() && config.ignored_employees.contains(employee))
        || (!location.is_empty() && config.ignored_locations.contains(location))
}
