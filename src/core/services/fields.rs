//! Strict parsing of receipt date and time fields
//!
//! Shared by the validator and the scoring engine so both agree on format.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static pattern"));

static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("static pattern"));

/// Parse a `YYYY-MM-DD` purchase date
///
/// Month and day must be zero-padded, and the date must exist on the calendar.
#[must_use]
pub fn parse_purchase_date(s: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a 24-hour `HH:MM` purchase time
#[must_use]
pub fn parse_purchase_time(s: &str) -> Option<NaiveTime> {
    if !TIME_SHAPE.is_match(s) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}
