use chrono::NaiveDate;

use super::error::InvoiceError;
use super::types::{DateRange, ExclusionPolicy};

/// Parse a `YYYY-MM-DD` date as produced by an HTML date input.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, InvoiceError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| InvoiceError::InvalidDate(format!("'{value}': {e}")))
}

/// Render a date as `DD Mon YYYY` (e.g. "05 Mar 2024").
///
/// `NaiveDate` has no timezone, so the printed day is always the calendar
/// day that was entered.
pub fn format_invoice_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Eligible days of `range` under `policy`, in chronological order.
///
/// An inverted range produces an empty list.
pub fn expand(range: DateRange, policy: &ExclusionPolicy) -> Vec<NaiveDate> {
    let dates: Vec<NaiveDate> = range.days().filter(|d| policy.is_eligible(*d)).collect();
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        eligible = dates.len(),
        "expanded date range"
    );
    dates
}
