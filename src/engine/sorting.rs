//! Name collation and summary re-sorting.
//!
//! Employee and location names are ordered with the Unicode Collation
//! Algorithm (root locale) rather than by byte value: base letters decide
//! first, so `Émile` sorts next to `Eve`, then accents, then case with
//! lower case first. Raw bytes break any remaining tie.

use std::cmp::Ordering;

use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeSummary;

/// A reusable collator for display ordering.
///
/// Comparisons take `&mut self` because the collator keeps scratch
/// buffers; build one per sort and reuse it across comparisons.
#[derive(Default)]
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    /// Creates a root-locale collator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares two names for display ordering.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b).then_with(|| a.cmp(b))
    }
}

/// Compares two names for display ordering.
///
/// Convenience for one-off comparisons; sorts should hold a
/// [`NameCollator`] instead.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use timesheet_audit::engine::locale_cmp;
///
/// assert_eq!(locale_cmp("alice", "Bob"), Ordering::Less);
/// assert_eq!(locale_cmp("bob", "Bob"), Ordering::Less);
/// assert_eq!(locale_cmp("Émile", "Fred"), Ordering::Less);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

/// The column a summary table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySortKey {
    /// Employee name (the default server order).
    #[default]
    Employee,
    /// Total amount owed.
    TotalOwed,
    /// Number of owed shifts.
    ShiftCount,
    /// Average owed per shift.
    AverageOwed,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

/// Re-sorts summary rows in place.
///
/// This only reorders the rows it is given; it never recomputes them. Ties
/// on the chosen column fall back to ascending employee name, so the result
/// does not depend on the incoming row order.
pub fn sort_summaries(summaries: &mut [EmployeeSummary], key: SummarySortKey, order: SortOrder) {
    let mut collator = NameCollator::new();
    summaries.sort_by(|a, b| {
        let primary = match key {
            SummarySortKey::Employee => collator.compare(&a.employee, &b.employee),
            SummarySortKey::TotalOwed => a.total_owed.cmp(&b.total_owed),
            SummarySortKey::ShiftCount => a.shift_count.cmp(&b.shift_count),
            SummarySortKey::AverageOwed => a.average_owed.cmp(&b.average_owed),
        };
        let primary = match order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        primary.then_with(|| collator.compare(&a.employee, &b.employee))
    });
}
