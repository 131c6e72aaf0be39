//! Payout discrepancy calculation.
//!
//! Each stage builds a new sequence from the previous one:
//! normalize → exclude → extract → attach bonus → keep owed → group →
//! sort → totals. The owed-shift list produced before grouping is the
//! reusable intermediate for the per-location report.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{NameSet, PayoutConfig};
use crate::models::{
    EmployeeSummary, LocationPayoutSnapshot, NormalizedRecord, OwedShift, PayoutReport,
    PayoutTotals, RawRecord, ShiftRecord,
};

use super::currency::parse_currency_text;
use super::normalize::normalize_all;
use super::sorting::NameCollator;

/// Columns the payout report reads.
pub const PAYOUT_COLUMNS: [&str; 4] = ["employee", "location", "tips", "cost"];

/// Computes the payout report for an upload.
///
/// `exclude_locations` drops shifts at those locations before anything
/// else is computed; pass `None` to keep every location. The whole-dataset
/// report passes the configured deny-list (see [`compute_payout_report`]).
///
/// Never fails: unparseable money reads as zero and an upload with no
/// usable rows yields an empty report.
pub fn compute_payout(
    records: &[RawRecord],
    config: &PayoutConfig,
    exclude_locations: Option<&NameSet>,
) -> PayoutReport {
    let owed = collect_owed_shifts(records, config, exclude_locations);
    summarize(&owed)
}

/// Computes the whole-dataset payout report using the configured location
/// deny-list.
pub fn compute_payout_report(records: &[RawRecord], config: &PayoutConfig) -> PayoutReport {
    compute_payout(records, config, Some(&config.excluded_locations))
}

/// Runs the pipeline up to the owed-shift stage.
pub fn collect_owed_shifts(
    records: &[RawRecord],
    config: &PayoutConfig,
    exclude_locations: Option<&NameSet>,
) -> Vec<OwedShift> {
    let normalized = normalize_all(records);

    let included: Vec<&NormalizedRecord> = normalized
        .iter()
        .filter(|record| is_included(record, config, exclude_locations))
        .collect();

    let shifts: Vec<ShiftRecord> = included.iter().map(|r| extract_shift(r)).collect();

    let owed: Vec<OwedShift> = shifts
        .into_iter()
        .filter_map(|shift| attach_amount_owed(shift, config))
        .collect();

    debug!(
        rows = records.len(),
        included = included.len(),
        owed = owed.len(),
        "Collected owed shifts"
    );
    owed
}

/// Builds the per-location snapshot: every owed shift with no location
/// exclusion, plus the sorted distinct locations among them.
pub fn compute_location_snapshot(
    records: &[RawRecord],
    config: &PayoutConfig,
) -> LocationPayoutSnapshot {
    let shifts = collect_owed_shifts(records, config, None);
    let locations = distinct_locations(&shifts);
    LocationPayoutSnapshot { shifts, locations }
}

/// Re-aggregates a snapshot for a subset of its locations.
///
/// Location names match case-insensitively. The result equals running
/// [`compute_payout`] from scratch with every other location excluded.
pub fn summarize_locations(snapshot: &LocationPayoutSnapshot, selected: &NameSet) -> PayoutReport {
    let shifts: Vec<OwedShift> = snapshot
        .shifts
        .iter()
        .filter(|shift| selected.contains(&shift.location))
        .cloned()
        .collect();
    summarize(&shifts)
}

/// Groups owed shifts by employee and computes per-employee and overall
/// totals. Summaries are ordered by employee name.
///
/// A shift that would push its employee's total or the overall total past
/// `Decimal`'s range is left out of both, so the summaries always add up to
/// the totals.
pub fn summarize(shifts: &[OwedShift]) -> PayoutReport {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, (Decimal, usize)> = HashMap::new();
    let mut amount = Decimal::ZERO;
    let mut counted = 0;

    for shift in shifts {
        let current = groups
            .get(shift.employee.as_str())
            .map_or(Decimal::ZERO, |(total, _)| *total);
        let (Some(subtotal), Some(total)) = (
            current.checked_add(shift.amount_owed),
            amount.checked_add(shift.amount_owed),
        ) else {
            warn!(
                employee = %shift.employee,
                location = %shift.location,
                amount_owed = %shift.amount_owed,
                "Skipping owed shift that overflows the running total"
            );
            continue;
        };

        let entry = groups.entry(shift.employee.as_str()).or_insert_with(|| {
            order.push(shift.employee.as_str());
            (Decimal::ZERO, 0)
        });
        entry.0 = subtotal;
        entry.1 += 1;
        amount = total;
        counted += 1;
    }

    let mut summaries: Vec<EmployeeSummary> = order
        .into_iter()
        .map(|employee| {
            let (total_owed, shift_count) = groups[employee];
            EmployeeSummary {
                employee: employee.to_string(),
                total_owed,
                shift_count,
                average_owed: average(total_owed, shift_count),
            }
        })
        .collect();
    let mut collator = NameCollator::new();
    summaries.sort_by(|a, b| collator.compare(&a.employee, &b.employee));

    let totals = PayoutTotals {
        amount,
        shifts: counted,
        average: average(amount, counted),
    };

    PayoutReport { summaries, totals }
}

/// Distinct locations among owed shifts, in display order.
pub fn distinct_locations(shifts: &[OwedShift]) -> Vec<String> {
    let unique: BTreeSet<&str> = shifts.iter().map(|s| s.location.as_str()).collect();
    let mut locations: Vec<String> = unique.into_iter().map(str::to_string).collect();
    let mut collator = NameCollator::new();
    locations.sort_by(|a, b| collator.compare(a, b));
    locations
}

fn is_included(
    record: &NormalizedRecord,
    config: &PayoutConfig,
    exclude_locations: Option<&NameSet>,
) -> bool {
    let employee = record.get("employee");
    if employee.is_empty() || config.excluded_employees.contains(employee) {
        return false;
    }
    match exclude_locations {
        Some(excluded) => !excluded.contains(record.get("location")),
        None => true,
    }
}

fn extract_shift(record: &NormalizedRecord) -> ShiftRecord {
    ShiftRecord {
        employee: record.get("employee").to_string(),
        location: record.get("location").to_string(),
        tips: parse_currency_text(record.get("tips")),
        cost: parse_currency_text(record.get("cost")),
    }
}

/// The bonus for a shift: the configured amount at the bonus location when
/// the shift is owed, zero otherwise.
pub fn bonus_for(shift: &ShiftRecord, config: &PayoutConfig) -> Decimal {
    if shift.location == config.bonus_location && shift.is_owed() {
        config.bonus_amount
    } else {
        Decimal::ZERO
    }
}

fn attach_amount_owed(shift: ShiftRecord, config: &PayoutConfig) -> Option<OwedShift> {
    let bonus = bonus_for(&shift, config);
    if !shift.is_owed() {
        return None;
    }
    let Some(amount_owed) = shift
        .cost
        .checked_sub(shift.tips)
        .and_then(|difference| difference.checked_add(bonus))
    else {
        warn!(
            employee = %shift.employee,
            location = %shift.location,
            tips = %shift.tips,
            cost = %shift.cost,
            "Skipping shift whose amount owed is out of range"
        );
        return None;
    };
    Some(OwedShift {
        employee: shift.employee,
        location: shift.location,
        tips: shift.tips,
        cost: shift.cost,
        bonus,
        amount_owed,
    })
}

fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count)
    }
}
