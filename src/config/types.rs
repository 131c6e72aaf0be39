//! Configuration types for the payout and reconciliation reports.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! built-in default, so a partial (or absent) file is valid.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A case-insensitive set of names (employees or locations).
///
/// Entries are trimmed and lower-cased once at construction, so membership
/// checks only lower-case the probe value.
///
/// # Example
///
/// ```
/// use timesheet_audit::config::NameSet;
///
/// let set = NameSet::new(["Troy", "Danny M"]);
/// assert!(set.contains("troy"));
/// assert!(set.contains("  DANNY m "));
/// assert!(!set.contains("Andy"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NameSet {
    names: HashSet<String>,
}

impl NameSet {
    /// Builds a set from any collection of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| fold(name.as_ref()))
                .collect(),
        }
    }

    /// Returns true if the value matches an entry, ignoring case and
    /// surrounding whitespace.
    pub fn contains(&self, value: &str) -> bool {
        self.names.contains(&fold(value))
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the set with `other`'s entries removed.
    pub fn difference(&self, other: &NameSet) -> NameSet {
        Self {
            names: self.names.difference(&other.names).cloned().collect(),
        }
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

impl From<Vec<String>> for NameSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<NameSet> for Vec<String> {
    fn from(set: NameSet) -> Self {
        let mut names: Vec<String> = set.names.into_iter().collect();
        names.sort();
        names
    }
}

impl<S: AsRef<str>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Rules for the payout discrepancy report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutConfig {
    /// Employees never included in the payout report. A blank employee is
    /// always excluded regardless of this list.
    pub excluded_employees: NameSet,
    /// Locations removed in whole-dataset mode.
    pub excluded_locations: NameSet,
    /// The location whose owed shifts earn a bonus (exact match).
    pub bonus_location: String,
    /// The bonus added to each owed shift at the bonus location.
    pub bonus_amount: Decimal,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            excluded_employees: NameSet::new([
                "Nick C", "Troy", "Andy", "Arod", "Danny M", "Jay", "Totals", "",
            ]),
            excluded_locations: NameSet::new([
                "Blu on the Hudson",
                "Chart House",
                "Haven",
                "Ruth's Chris",
            ]),
            bonus_location: "Fleming's Condo".to_string(),
            bonus_amount: Decimal::new(135, 1),
        }
    }
}

/// Rules for the missed-shift reconciliation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    /// Employees dropped from both the scheduled and timesheet files.
    pub ignored_employees: NameSet,
    /// Locations dropped from both the scheduled and timesheet files.
    pub ignored_locations: NameSet,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            ignored_employees: NameSet::new([
                "Luke Whelan",
                "Tony",
                "Arod",
                "Danny M",
                "Aquib",
                "Nick C",
                "Andy",
                "Troy",
                "Rony",
                "Alexander M Kiwowicz",
                "Michael C",
                "Jay",
                "Dave",
                "Nick T",
            ]),
            ignored_locations: NameSet::new([
                "Blu on the Hudson",
                "Ruth's Chris",
                "Haven",
                "Chart House",
                "Fleming's Edgewater",
            ]),
        }
    }
}

/// The complete audit configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Payout report rules.
    pub payout: PayoutConfig,
    /// Reconciliation report rules.
    pub reconciliation: ReconciliationConfig,
}
