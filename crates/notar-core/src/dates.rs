//! Issue-date normalization and range filtering.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{NotarError, Result};

/// Canonical token format for normalized dates and range bounds.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

lazy_static! {
    /// `DD/MM/YYYY`, possibly followed by extraneous text (the issue
    /// date zone on the template carries a time suffix). Also accepts
    /// an already-normalized `DD-MM-YYYY` token.
    static ref ISSUE_DATE: Regex = Regex::new(r"(\d{2})[/-](\d{2})[/-](\d{4})").unwrap();
}

/// Normalize a raw issue-date string to a canonical `DD-MM-YYYY`
/// token, dropping any trailing detail. Returns `None` when no date
/// token is found.
pub fn normalize_issue_date(raw: &str) -> Option<String> {
    ISSUE_DATE
        .captures(raw)
        .map(|caps| format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]))
}

/// Parse a user-supplied range bound in `DD-MM-YYYY` format.
///
/// Failure here is batch-fatal: the caller must abort before touching
/// any document.
pub fn parse_range_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| NotarError::DateRange {
        input: input.to_string(),
        expected: "DD-MM-YYYY",
    })
}

/// Inclusive range test for a raw issue-date string.
///
/// Malformed or unparseable dates are excluded, never raised.
pub fn in_range(issue_date: &str, start: NaiveDate, end: NaiveDate) -> bool {
    let Some(normalized) = normalize_issue_date(issue_date) else {
        return false;
    };

    match NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
        Ok(date) => date >= start && date <= end,
        Err(_) => false,
    }
}
