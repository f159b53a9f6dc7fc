//! Calendar-date parsing and the injectable clock.
//!
//! Dates are plain local calendar days (`NaiveDate`). "Now" is a local
//! wall-clock instant whose time of day is ignored when deciding whether a
//! date still lies ahead.

use chrono::{Local, NaiveDate, NaiveDateTime};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict ISO `YYYY-MM-DD` date.
///
/// Chrono alone accepts unpadded fields such as `2025-6-1`; the length and
/// separator check pins the input to the zero-padded ten-character form.
///
/// Returns a human-readable reason on failure so callers can wrap it into
/// [`CallSheetError::InvalidDate`](crate::CallSheetError::InvalidDate).
pub fn parse_iso_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("expected YYYY-MM-DD".to_string());
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return Err("expected YYYY-MM-DD".to_string());
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|e| e.to_string())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// True when `date` is on or after the calendar day of `reference_now`.
///
/// Both sides are compared as whole days, so a date equal to today counts as
/// future regardless of the current time of day.
pub fn is_future(date: NaiveDate, reference_now: NaiveDateTime) -> bool {
    date >= reference_now.date()
}

/// Source of the current local instant.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// The calendar day of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant, for tests and reproducible reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// A clock reading midnight at the start of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
