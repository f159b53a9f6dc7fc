//! # callsheet-engine
//!
//! Cast and crew availability aggregation for film call sheets.
//!
//! Given a roster of people, each with the calendar days they can shoot, the
//! engine works out how many people are free on each upcoming day, which days
//! have at least two people free, the single best day, and how those days
//! group into consecutive multi-day shoot windows.
//!
//! ## Quick start
//!
//! ```rust
//! use callsheet_engine::{parse_roster, summarize_with_clock, FixedClock};
//! use chrono::NaiveDate;
//!
//! let roster = parse_roster(r#"[
//!     {"name": "Alice", "available_dates": ["2025-06-02", "2025-06-03"]},
//!     {"name": "Bob",   "available_dates": ["2025-06-03"]}
//! ]"#).unwrap();
//!
//! let today = FixedClock::on(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
//! let summary = summarize_with_clock(&roster, &today);
//! let best = summary.best_date.unwrap();
//! assert_eq!(best.date.to_string(), "2025-06-03");
//! assert_eq!(best.count, 2);
//! ```
//!
//! ## Modules
//!
//! - [`entry`] — Entry types and ingestion validation
//! - [`date`] — Strict ISO date parsing, `is_future`, injectable clocks
//! - [`availability`] — Per-date counts, common dates, best date
//! - [`ranges`] — Consecutive-day grouping
//! - [`summary`] — The full pipeline
//! - [`store`] — Call sheet store contract and in-memory store
//! - [`error`] — Error types

pub mod availability;
pub mod date;
pub mod entry;
pub mod error;
pub mod ranges;
pub mod store;
pub mod summary;

pub use availability::{
    available_members, compute_best_date, compute_common_dates, compute_date_counts, DateCount,
    DateCounts, MIN_COMMON_HEADCOUNT,
};
pub use date::{format_iso_date, is_future, parse_iso_date, Clock, FixedClock, SystemClock};
pub use entry::{parse_roster, CallSheetEntry, EntryPatch, EntryRecord, NewEntry};
pub use error::{CallSheetError, Result};
pub use ranges::{compute_consecutive_ranges, ConsecutiveRange};
pub use store::{CallSheetStore, InMemoryCallSheetStore};
pub use summary::{summarize, summarize_with_clock, AvailabilitySummary};
