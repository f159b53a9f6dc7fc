//! Group common dates into maximal runs of consecutive calendar days.
//!
//! A run is extended only when the next date is exactly one day after the
//! previous one. Day differences use `NaiveDate` arithmetic, so runs cross
//! month and year boundaries correctly.

use serde::{Deserialize, Serialize};

use crate::availability::DateCount;

/// A maximal run of consecutive common dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsecutiveRange {
    /// First day of the run.
    pub start: DateCount,
    /// Last day of the run. Equal to `start` for a single-day run.
    pub end: DateCount,
    /// Lowest headcount on any day of the run, interior days included.
    pub min_count: usize,
    /// Highest headcount on any day of the run.
    pub max_count: usize,
    /// Every day of the run, in order.
    pub days: Vec<DateCount>,
}

impl ConsecutiveRange {
    fn starting_at(day: DateCount) -> Self {
        Self {
            start: day,
            end: day,
            min_count: day.count,
            max_count: day.count,
            days: vec![day],
        }
    }

    fn extend(&mut self, day: DateCount) {
        self.end = day;
        self.min_count = self.min_count.min(day.count);
        self.max_count = self.max_count.max(day.count);
        self.days.push(day);
    }

    pub fn is_single_day(&self) -> bool {
        self.days.len() == 1
    }
}

/// Partition `common_dates` into maximal consecutive-day runs.
///
/// Input is expected strictly ascending by date (as produced by
/// [`compute_common_dates`](crate::compute_common_dates)); anything else is
/// sorted first, keeping the first occurrence of a repeated date. Output
/// ranges are in chronological order.
pub fn compute_consecutive_ranges(common_dates: &[DateCount]) -> Vec<ConsecutiveRange> {
    let sorted;
    let dates = if common_dates.windows(2).all(|w| w[0].date < w[1].date) {
        common_dates
    } else {
        let mut owned = common_dates.to_vec();
        owned.sort_by_key(|dc| dc.date);
        owned.dedup_by_key(|dc| dc.date);
        sorted = owned;
        &sorted[..]
    };

    let mut ranges: Vec<ConsecutiveRange> = Vec::new();
    for &day in dates {
        if let Some(current) = ranges.last_mut() {
            if (day.date - current.end.date).num_days() == 1 {
                current.extend(day);
                continue;
            }
        }
        ranges.push(ConsecutiveRange::starting_at(day));
    }

    ranges
}
