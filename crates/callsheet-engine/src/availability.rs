//! Per-date headcounts, common dates, and the best shoot day.
//!
//! Only dates on or after the reference day are counted; past availability
//! cannot be used to plan a shoot.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::date::is_future;
use crate::entry::CallSheetEntry;

/// Minimum number of people free on a date for it to count as common.
pub const MIN_COMMON_HEADCOUNT: usize = 2;

/// Headcount per date.
pub type DateCounts = BTreeMap<NaiveDate, usize>;

/// A date paired with how many people are free on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: usize,
}

impl DateCount {
    pub fn new(date: NaiveDate, count: usize) -> Self {
        Self { date, count }
    }
}

/// Count, for each future date, how many distinct entries list it.
///
/// Entries with no dates contribute nothing.
pub fn compute_date_counts(entries: &[CallSheetEntry], reference_now: NaiveDateTime) -> DateCounts {
    let mut counts = DateCounts::new();
    for entry in entries {
        for &date in &entry.available_dates {
            if is_future(date, reference_now) {
                *counts.entry(date).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Dates where at least [`MIN_COMMON_HEADCOUNT`] people are free, ascending
/// by date.
///
/// An empty result is normal: fewer than two people with dates, or no
/// overlap.
pub fn compute_common_dates(date_counts: &DateCounts) -> Vec<DateCount> {
    // BTreeMap iterates in date order.
    date_counts
        .iter()
        .filter(|&(_, &count)| count >= MIN_COMMON_HEADCOUNT)
        .map(|(&date, &count)| DateCount::new(date, count))
        .collect()
}

/// The common date with the highest headcount.
///
/// Ties go to the earliest date. The rule is applied by comparison, so the
/// result does not depend on the order of `common_dates`.
pub fn compute_best_date(common_dates: &[DateCount]) -> Option<DateCount> {
    common_dates.iter().copied().fold(None, |best, candidate| match best {
        Some(current)
            if current.count > candidate.count
                || (current.count == candidate.count && current.date <= candidate.date) =>
        {
            Some(current)
        }
        _ => Some(candidate),
    })
}

/// Entries free on `date`, in roster order.
///
/// No future filter is applied: the caller is asking about a specific day.
pub fn available_members(entries: &[CallSheetEntry], date: NaiveDate) -> Vec<&CallSheetEntry> {
    entries.iter().filter(|e| e.is_available_on(date)).collect()
}
