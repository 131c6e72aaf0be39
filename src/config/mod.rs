//! Configuration loading and management for the timesheet audit engine.
//!
//! Exclusion lists and the bonus rule are passed into the engine at call
//! time rather than living in process-wide constants, so tests and
//! deployments can vary them freely.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_audit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Bonus location: {}", config.payout().bonus_location);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AuditConfig, NameSet, PayoutConfig, ReconciliationConfig};
