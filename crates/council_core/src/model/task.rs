//! Task and task note domain model.
//!
//! # Invariants
//! - `description` is trimmed and never blank.
//! - `created_at_ms` is fixed at creation.
//! - Notes are append-only and kept in insertion order.

use super::ids::{NoteId, PersonId, TaskId};
use super::{normalize_text, now_epoch_ms, ValidationError};
use crate::catalog::organization::OrgId;
use serde::{Deserialize, Serialize};

/// Author label used when a note is submitted without one.
pub const DEFAULT_NOTE_AUTHOR: &str = "Líder";

/// Progress report appended to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNote {
    pub id: NoteId,
    /// Free text, usually the reporting organization's name.
    pub author: String,
    pub text: String,
    /// Unix epoch milliseconds.
    pub date_ms: i64,
}

impl TaskNote {
    /// Creates a note stamped with the current time.
    ///
    /// A blank `author` falls back to `DEFAULT_NOTE_AUTHOR`.
    pub fn new(author: &str, text: &str) -> Result<Self, ValidationError> {
        let text = normalize_text(text).ok_or(ValidationError::BlankNoteText)?;
        Ok(Self {
            id: NoteId::new(),
            author: normalize_text(author).unwrap_or_else(|| DEFAULT_NOTE_AUTHOR.to_string()),
            text,
            date_ms: now_epoch_ms(),
        })
    }
}

/// Follow-up work assigned to an organization on behalf of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub person_id: PersonId,
    pub assigned_to_org: OrgId,
    pub description: String,
    pub is_completed: bool,
    /// Unix epoch milliseconds.
    pub created_at_ms: i64,
    notes: Vec<TaskNote>,
}

impl Task {
    /// Creates an open task with no notes.
    pub fn new(
        person_id: PersonId,
        assigned_to_org: OrgId,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let description = normalize_text(description).ok_or(ValidationError::BlankDescription)?;
        Ok(Self {
            id: TaskId::new(),
            person_id,
            assigned_to_org,
            description,
            is_completed: false,
            created_at_ms: now_epoch_ms(),
            notes: Vec::new(),
        })
    }

    pub fn notes(&self) -> &[TaskNote] {
        &self.notes
    }

    pub fn append_note(&mut self, note: TaskNote) {
        self.notes.push(note);
    }

    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }
}

#[derive(Debug, Deserialize)]
struct TaskRecord {
    id: TaskId,
    person_id: PersonId,
    assigned_to_org: OrgId,
    description: String,
    #[serde(default)]
    is_completed: bool,
    created_at_ms: i64,
    #[serde(default)]
    notes: Vec<TaskNote>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let description =
            normalize_text(&record.description).ok_or(ValidationError::BlankDescription)?;
        if record
            .notes
            .iter()
            .any(|note| note.text.trim().is_empty())
        {
            return Err(ValidationError::BlankNoteText);
        }
        Ok(Self {
            id: record.id,
            person_id: record.person_id,
            assigned_to_org: record.assigned_to_org,
            description,
            is_completed: record.is_completed,
            created_at_ms: record.created_at_ms,
            notes: record.notes,
        })
    }
}
