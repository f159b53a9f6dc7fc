//! Call-sheet entries and the ingestion boundary.
//!
//! Raw JSON arrives as [`EntryRecord`] (every field optional, dates as
//! strings). [`EntryRecord::validate`] turns it into a [`CallSheetEntry`],
//! rejecting blank names and anything that is not a strict `YYYY-MM-DD`
//! calendar date. Past this point dates are `NaiveDate`s and cannot be
//! malformed.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date::parse_iso_date;
use crate::error::{CallSheetError, Result};

/// A validated cast or crew member with the days they can shoot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSheetEntry {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Display name, never blank.
    pub name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    /// Days this person is free. Set semantics: duplicates collapse.
    pub available_dates: BTreeSet<NaiveDate>,
}

impl CallSheetEntry {
    /// Whether this person listed `date` as available.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.available_dates.contains(&date)
    }

    /// Whether this person has listed any dates at all.
    pub fn has_dates(&self) -> bool {
        !self.available_dates.is_empty()
    }
}

/// Unvalidated entry as it appears on the wire.
///
/// Accepts both `available_dates` and `availableDates`, and tolerates `null`
/// for any field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "availableDates")]
    pub available_dates: Option<Vec<String>>,
}

impl EntryRecord {
    /// Validate into a [`CallSheetEntry`].
    ///
    /// A missing or blank `id` is replaced with a fresh UUID v4.
    ///
    /// # Errors
    /// Returns `CallSheetError::MissingName` if the name is absent or blank.
    /// Returns `CallSheetError::InvalidDate` for the first date that is not a
    /// strict `YYYY-MM-DD` calendar day.
    pub fn validate(self) -> Result<CallSheetEntry> {
        let id = non_blank(self.id).unwrap_or_else(|| Uuid::new_v4().to_string());
        let dates = self.available_dates.unwrap_or_default();
        build_entry(
            id,
            self.name.unwrap_or_default(),
            self.role,
            self.phone,
            self.email,
            self.notes,
            &dates,
        )
    }
}

/// Fields for creating an entry; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "availableDates")]
    pub available_dates: Vec<String>,
}

impl NewEntry {
    /// A new entry with just a name and dates.
    pub fn new(name: impl Into<String>, dates: &[&str]) -> Self {
        Self {
            name: name.into(),
            available_dates: dates.iter().map(|d| d.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Validate and attach the store-assigned `id`.
    pub fn into_entry(self, id: String) -> Result<CallSheetEntry> {
        build_entry(
            id,
            self.name,
            self.role,
            self.phone,
            self.email,
            self.notes,
            &self.available_dates,
        )
    }
}

/// A partial update. Only fields that are `Some` are applied.
///
/// Setting a text field to `Some("")` clears it. Setting `available_dates`
/// replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, alias = "availableDates")]
    pub available_dates: Option<Vec<String>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.notes.is_none()
            && self.available_dates.is_none()
    }

    /// Apply this patch to `entry`, returning the validated result.
    ///
    /// `entry` is left untouched if validation fails.
    pub fn apply(&self, entry: &CallSheetEntry) -> Result<CallSheetEntry> {
        if self.is_empty() {
            return Err(CallSheetError::EmptyUpdate(entry.id.clone()));
        }

        let name = self.name.clone().unwrap_or_else(|| entry.name.clone());
        let pick = |patched: &Option<String>, current: &Option<String>| {
            patched.clone().or_else(|| current.clone())
        };

        let mut updated = build_entry(
            entry.id.clone(),
            name,
            pick(&self.role, &entry.role),
            pick(&self.phone, &entry.phone),
            pick(&self.email, &entry.email),
            pick(&self.notes, &entry.notes),
            self.available_dates.as_deref().unwrap_or_default(),
        )?;
        if self.available_dates.is_none() {
            updated.available_dates = entry.available_dates.clone();
        }
        Ok(updated)
    }
}

/// Parse a JSON array of entry records and validate every one.
///
/// # Errors
/// Returns `CallSheetError::Json` if the document is not an array of entry
/// objects, `CallSheetError::DuplicateId` if two records share an id, or the
/// first validation error encountered.
pub fn parse_roster(json: &str) -> Result<Vec<CallSheetEntry>> {
    let records: Vec<EntryRecord> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .map(|record| {
            let entry = record.validate()?;
            if !seen.insert(entry.id.clone()) {
                return Err(CallSheetError::DuplicateId(entry.id));
            }
            Ok(entry)
        })
        .collect()
}

fn build_entry(
    id: String,
    name: String,
    role: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    notes: Option<String>,
    dates: &[String],
) -> Result<CallSheetEntry> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CallSheetError::MissingName { id });
    }

    let available_dates = dates
        .iter()
        .map(|value| {
            parse_iso_date(value).map_err(|reason| CallSheetError::InvalidDate {
                entry: name.clone(),
                value: value.clone(),
                reason,
            })
        })
        .collect::<Result<BTreeSet<NaiveDate>>>()?;

    Ok(CallSheetEntry {
        id,
        name,
        role: non_blank(role),
        phone: non_blank(phone),
        email: non_blank(email),
        notes: non_blank(notes),
        available_dates,
    })
}

// Blank text fields count as unset.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
