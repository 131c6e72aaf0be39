//! Optional column discovery.
//!
//! Schedule exports name their start/end columns in several ways. The
//! lookup here only needs a membership test, so it works against any record
//! representation.

/// Start-time column names, highest priority first.
pub const START_TIME_ALIASES: [&str; 6] = [
    "start_time",
    "start time",
    "start",
    "scheduled_start",
    "scheduled start",
    "shift start",
];

/// End-time column names, highest priority first.
pub const END_TIME_ALIASES: [&str; 6] = [
    "end_time",
    "end time",
    "end",
    "scheduled_end",
    "scheduled end",
    "shift end",
];

/// Returns the first candidate for which `has_column` holds.
///
/// # Example
///
/// ```
/// use timesheet_audit::engine::{find_first_column, START_TIME_ALIASES};
///
/// let columns = ["employee", "shift start", "start"];
/// let found = find_first_column(&START_TIME_ALIASES, |name| columns.contains(&name));
/// assert_eq!(found, Some("start"));
/// ```
pub fn find_first_column<'a, F>(candidates: &[&'a str], mut has_column: F) -> Option<&'a str>
where
    F: FnMut(&str) -> bool,
{
    candidates
        .iter()
        .copied()
        .find(|&candidate| has_column(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_wins_over_column_order() {
        let columns = ["scheduled_end", "end time"];
        let found = find_first_column(&END_TIME_ALIASES, |name| columns.contains(&name));
        assert_eq!(found, Some("end time"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let found = find_first_column(&START_TIME_ALIASES, |_| false);
        assert_eq!(found, None);
    }

    #[test]
    fn test_empty_candidate_list() {
        let found = find_first_column(&[], |_| true);
        assert_eq!(found, None);
    }
}
