//! Core data models for the timesheet audit engine.
//!
//! All models are per-request value objects; nothing here is shared or
//! persisted between reports.

mod missed_shift;
mod payout_report;
mod record;
mod shift;

pub use missed_shift::{
    EmployeeMissedShifts, MissedShift, MissedShiftReport, ReconciliationKey,
};
pub use payout_report::{
    EmployeeSummary, LocationPayoutReport, LocationPayoutSnapshot, PayoutReport, PayoutTotals,
};
pub use record::{NormalizedRecord, RawRecord, RawValue};
pub use shift::{OwedShift, ShiftRecord};
