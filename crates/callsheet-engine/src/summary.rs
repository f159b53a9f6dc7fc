//! The full availability pipeline over a roster.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{
    compute_best_date, compute_common_dates, compute_date_counts, DateCount, DateCounts,
};
use crate::date::Clock;
use crate::entry::CallSheetEntry;
use crate::ranges::{compute_consecutive_ranges, ConsecutiveRange};

/// Every derived aggregate for one roster at one reference instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    /// Number of entries on the roster.
    pub roster_size: usize,
    /// Entries that have listed at least one date, past or future.
    pub scheduled_members: usize,
    /// Headcount per future date.
    pub date_counts: DateCounts,
    /// Dates with two or more people free, ascending.
    pub common_dates: Vec<DateCount>,
    /// Highest-headcount common date, earliest on ties.
    pub best_date: Option<DateCount>,
    /// Consecutive-day runs of common dates.
    pub ranges: Vec<ConsecutiveRange>,
}

impl AvailabilitySummary {
    /// Whether everyone on the roster is free on `day`.
    pub fn is_full_attendance(&self, day: &DateCount) -> bool {
        self.roster_size > 0 && day.count == self.roster_size
    }
}

/// Run the whole pipeline for `entries` as of `reference_now`.
///
/// Pure: the same input and instant always produce the same summary.
pub fn summarize(entries: &[CallSheetEntry], reference_now: NaiveDateTime) -> AvailabilitySummary {
    let date_counts = compute_date_counts(entries, reference_now);
    let common_dates = compute_common_dates(&date_counts);
    let best_date = compute_best_date(&common_dates);
    let ranges = compute_consecutive_ranges(&common_dates);

    debug!(
        roster = entries.len(),
        counted_dates = date_counts.len(),
        common = common_dates.len(),
        ranges = ranges.len(),
        "computed call sheet availability"
    );

    AvailabilitySummary {
        roster_size: entries.len(),
        scheduled_members: entries.iter().filter(|e| e.has_dates()).count(),
        date_counts,
        common_dates,
        best_date,
        ranges,
    }
}

/// [`summarize`] with "now" read from `clock`.
pub fn summarize_with_clock(entries: &[CallSheetEntry], clock: &impl Clock) -> AvailabilitySummary {
    summarize(entries, clock.now())
}
