//! Entity model for the council board.
//!
//! # Responsibility
//! - Define Person, Task and TaskNote records and their identifiers.
//! - Own the lifecycle helpers for archive/restore and note appends.
//!
//! # Invariants
//! - Every entity is identified by a stable, never-reused UUID newtype.
//! - Required text fields are trimmed and never blank.
//! - Archive is a soft state on Person; only the store performs hard deletes.

pub mod ids;
pub mod person;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Validation failures for entity construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    BlankName,
    BlankDescription,
    BlankNoteText,
    /// `previous_status` was supplied for a person that is not archived.
    PreviousStatusWhileActive,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "person name must not be blank"),
            Self::BlankDescription => write!(f, "task description must not be blank"),
            Self::BlankNoteText => write!(f, "note text must not be blank"),
            Self::PreviousStatusWhileActive => {
                write!(f, "previous_status is only allowed on archived people")
            }
        }
    }
}

impl Error for ValidationError {}

/// Trims `value`; returns `None` when nothing is left.
pub(crate) fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Current wall clock as Unix epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
