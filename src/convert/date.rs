//! Date arithmetic: difference in days, add/subtract days.

use chrono::{Days, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    BadDate(String),
    #[error("resulting date is out of the representable range")]
    OutOfRange,
}

fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::BadDate(input.trim().to_string()))
}

/// Whole days between two dates, always non-negative.
pub fn diff_days(start: &str, end: &str) -> Result<i64, DateError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Ok((end - start).num_days().abs())
}

/// Add (or with negative `days`, subtract) days from a date.
pub fn add_days(date: &str, days: i64) -> Result<NaiveDate, DateError> {
    let date = parse_date(date)?;
    let result = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    result.ok_or(DateError::OutOfRange)
}
