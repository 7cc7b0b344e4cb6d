//! Calendar helpers for the consumption statistics.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::server::error::Error;

/// Days of history kept before rows are purged.
pub const HISTORY_RETENTION_DAYS: u64 = 400;

/// First and last calendar day of the month `months_back` months before `today`.
///
/// # Returns
/// - `Ok((first, last))` - Inclusive bounds of the month
/// - `Err(Error::InternalError)` - The month lies outside the supported date range
pub fn month_bounds(today: NaiveDate, months_back: u32) -> Result<(NaiveDate, NaiveDate), Error> {
    let out_of_range = || {
        Error::InternalError(format!(
            "Month {} months before {} is out of range",
            months_back, today
        ))
    };

    let day_in_month = today
        .checked_sub_months(Months::new(months_back))
        .ok_or_else(out_of_range)?;
    let first = day_in_month.with_day(1).ok_or_else(out_of_range)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .ok_or_else(out_of_range)?;

    Ok((first, last))
}

/// Label of the month containing `date`, e.g. `October, 2026`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B, %Y").to_string()
}

/// Oldest date still kept in the history relative to `today`.
pub fn purge_threshold(today: NaiveDate) -> Result<NaiveDate, Error> {
    today
        .checked_sub_days(Days::new(HISTORY_RETENTION_DAYS))
        .ok_or_else(|| Error::InternalError(format!("Purge threshold before {} is out of range", today)))
}
