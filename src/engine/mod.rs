//! The normalization, filtering, reconciliation and aggregation engine.
//!
//! Everything here is a synchronous pure function of its inputs. Row-level
//! anomalies (unparseable money, blank fields, missing columns) degrade to
//! defaults instead of failing, so no function in this module returns a
//! `Result`.

mod columns;
mod currency;
mod normalize;
mod payout;
mod reconciliation;
mod sorting;

pub use columns::{END_TIME_ALIASES, START_TIME_ALIASES, find_first_column};
pub use currency::{parse_currency, parse_currency_text};
pub use normalize::{normalize, normalize_all};
pub use payout::{
    PAYOUT_COLUMNS, bonus_for, collect_owed_shifts, compute_location_snapshot, compute_payout,
    compute_payout_report, distinct_locations, summarize, summarize_locations,
};
pub use reconciliation::{RECONCILIATION_KEY_COLUMNS, ScheduleTimeColumns, find_missed_shifts};
pub use sorting::{NameCollator, SortOrder, SummarySortKey, locale_cmp, sort_summaries};
