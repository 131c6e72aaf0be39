//! HTTP API module for the timesheet audit engine.
//!
//! This module provides the upload endpoints for the payout and
//! missed-shift reports. Each request is computed independently from the
//! files it carries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_UPLOAD_BYTES, create_router};
pub use request::{PayoutQuery, UploadForm, UploadedFile};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
