//! WASM bindings for callsheet-engine.
//!
//! Exposes the availability summary and the per-date member lookup to the
//! browser front end via `wasm-bindgen`. Rosters and results cross the
//! boundary as JSON strings, in the same shape the call sheet API returns.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p callsheet-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/callsheet_wasm.wasm
//! ```

use callsheet_engine::{
    available_members, parse_iso_date, parse_roster, summarize, CallSheetEntry, Clock,
    FixedClock, SystemClock,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MemberDto<'a> {
    id: &'a str,
    name: &'a str,
    role: Option<&'a str>,
}

impl<'a> From<&'a CallSheetEntry> for MemberDto<'a> {
    fn from(e: &'a CallSheetEntry) -> Self {
        Self {
            id: &e.id,
            name: &e.name,
            role: e.role.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    parse_iso_date(s).map_err(|reason| js_err(format!("Invalid date '{}': {}", s, reason)))
}

fn parse_entries(json: &str) -> Result<Vec<CallSheetEntry>, JsValue> {
    parse_roster(json).map_err(js_err)
}

fn reference_now(today: Option<String>) -> Result<NaiveDateTime, JsValue> {
    match today {
        Some(day) => Ok(FixedClock::on(parse_date(&day)?).now()),
        None => Ok(SystemClock.now()),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the availability summary for a roster.
///
/// `entries_json` is a JSON array of call sheet entries. `today` optionally
/// pins the reference day (`YYYY-MM-DD`); the browser's local clock is used
/// otherwise. Returns the summary as a JSON string.
#[wasm_bindgen(js_name = "computeAvailability")]
pub fn compute_availability(entries_json: &str, today: Option<String>) -> Result<String, JsValue> {
    let entries = parse_entries(entries_json)?;
    let now = reference_now(today)?;

    let summary = summarize(&entries, now);

    serde_json::to_string(&summary)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// List the roster members free on `date`, as a JSON array of
/// `{id, name, role}` objects in roster order.
#[wasm_bindgen(js_name = "availableMembers")]
pub fn available_members_on(entries_json: &str, date: &str) -> Result<String, JsValue> {
    let entries = parse_entries(entries_json)?;
    let date = parse_date(date)?;

    let members: Vec<MemberDto> = available_members(&entries, date)
        .into_iter()
        .map(MemberDto::from)
        .collect();

    serde_json::to_string(&members)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Validate a roster. Returns the number of entries, or the first validation
/// error as a string.
#[wasm_bindgen(js_name = "validateRoster")]
pub fn validate_roster(entries_json: &str) -> Result<u32, JsValue> {
    let entries = parse_entries(entries_json)?;
    u32::try_from(entries.len()).map_err(js_err)
}
