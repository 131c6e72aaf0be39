//! Timesheet audit engine.
//!
//! This crate turns timesheet and schedule CSV exports into two reports:
//! a per-employee payout discrepancy summary (shifts where recorded cost
//! exceeded recorded tips, plus a location bonus) and a missed-shift report
//! that reconciles scheduled shifts against worked timesheets.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod report;
