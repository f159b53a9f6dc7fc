//! The call sheet store contract and an in-memory implementation.
//!
//! A store owns entries per project and is the ingestion boundary: every add
//! and update is validated before it is kept, so whatever `list_entries`
//! returns can be fed straight to [`summarize`](crate::summarize).

use std::collections::HashMap;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::entry::{CallSheetEntry, EntryPatch, NewEntry};
use crate::error::{CallSheetError, Result};

/// CRUD over call sheet entries, keyed by project.
pub trait CallSheetStore {
    /// Entries for `project_id` in creation order. Unknown projects yield an
    /// empty list.
    fn list_entries(&self, project_id: &str) -> Vec<CallSheetEntry>;

    /// Validate and add an entry; the store assigns its id.
    fn add_entry(&mut self, project_id: &str, entry: NewEntry) -> Result<CallSheetEntry>;

    /// Apply a partial update to an existing entry.
    ///
    /// # Errors
    /// `EntryNotFound` for an unknown id, `EmptyUpdate` when the patch sets
    /// nothing, or a validation error for the merged entry.
    fn update_entry(&mut self, entry_id: &str, patch: EntryPatch) -> Result<CallSheetEntry>;

    /// Remove an entry.
    fn delete_entry(&mut self, entry_id: &str) -> Result<()>;
}

/// Store backed by a map of project id to entries.
#[derive(Debug, Default)]
pub struct InMemoryCallSheetStore {
    projects: HashMap<String, Vec<CallSheetEntry>>,
}

impl InMemoryCallSheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_mut(&mut self, entry_id: &str) -> Option<&mut CallSheetEntry> {
        self.projects
            .values_mut()
            .flat_map(|entries| entries.iter_mut())
            .find(|e| e.id == entry_id)
    }
}

impl CallSheetStore for InMemoryCallSheetStore {
    fn list_entries(&self, project_id: &str) -> Vec<CallSheetEntry> {
        self.projects.get(project_id).cloned().unwrap_or_default()
    }

    fn add_entry(&mut self, project_id: &str, entry: NewEntry) -> Result<CallSheetEntry> {
        let entry = entry.into_entry(Uuid::new_v4().to_string())?;
        debug!(project_id, entry_id = %entry.id, name = %entry.name, "adding call sheet entry");
        self.projects
            .entry(project_id.to_string())
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    fn update_entry(&mut self, entry_id: &str, patch: EntryPatch) -> Result<CallSheetEntry> {
        let Some(current) = self.find_mut(entry_id) else {
            warn!(entry_id, "update for unknown call sheet entry");
            return Err(CallSheetError::EntryNotFound(entry_id.to_string()));
        };
        let updated = patch.apply(current)?;
        *current = updated.clone();
        debug!(entry_id, "updated call sheet entry");
        Ok(updated)
    }

    fn delete_entry(&mut self, entry_id: &str) -> Result<()> {
        for entries in self.projects.values_mut() {
            if let Some(pos) = entries.iter().position(|e| e.id == entry_id) {
                entries.remove(pos);
                debug!(entry_id, "deleted call sheet entry");
                return Ok(());
            }
        }
        warn!(entry_id, "delete for unknown call sheet entry");
        Err(CallSheetError::EntryNotFound(entry_id.to_string()))
    }
}
