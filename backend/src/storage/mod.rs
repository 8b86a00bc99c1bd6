//! # Storage Layer
//!
//! SQLite-backed persistence for the program records. Dates are stored as
//! TEXT: RFC 3339 for timestamps, `YYYY-MM-DD` for calendar dates.

pub mod db;
pub mod repositories;
pub mod traits;

pub use db::DbConnection;
pub use traits::{
    HackathonStorage, PayoutStorage, ProgressStorage, ProjectStorage, SubmissionStorage,
};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a stored RFC 3339 timestamp back into UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid stored timestamp '{}'", raw))?
        .with_timezone(&Utc))
}

/// Parse a stored `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid stored date '{}'", raw))
}

/// Format a calendar date for storage.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
