//! Shift models for the payout report.
//!
//! This module defines [`ShiftRecord`], the typed view of a timesheet row,
//! and [`OwedShift`], a shift whose recorded cost exceeded its recorded
//! tips.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A timesheet row reduced to the four fields the payout report reads.
///
/// # Example
///
/// ```
/// use timesheet_audit::models::ShiftRecord;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftRecord {
///     employee: "Alice".to_string(),
///     location: "Fleming's Condo".to_string(),
///     tips: Decimal::new(5, 0),
///     cost: Decimal::new(20, 0),
/// };
/// assert!(shift.is_owed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The employee who worked the shift.
    pub employee: String,
    /// The location the shift was worked at.
    pub location: String,
    /// The tips recorded for the shift.
    pub tips: Decimal,
    /// The cost recorded for the shift.
    pub cost: Decimal,
}

impl ShiftRecord {
    /// Returns true when cost strictly exceeds tips.
    pub fn is_owed(&self) -> bool {
        self.cost > self.tips
    }
}

/// A shift that generates a payable amount.
///
/// Only constructed for shifts where `cost > tips`. The amount owed is
/// `cost - tips + bonus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwedShift {
    /// The employee who worked the shift.
    pub employee: String,
    /// The location the shift was worked at.
    pub location: String,
    /// The tips recorded for the shift.
    pub tips: Decimal,
    /// The cost recorded for the shift.
    pub cost: Decimal,
    /// Location bonus attached to the shift (zero when none applies).
    pub bonus: Decimal,
    /// The amount owed for the shift.
    pub amount_owed: Decimal,
}
