//! Core domain logic for the ward council board.
//! This crate is the single source of truth for board invariants: the path and
//! organization catalogs, the person/task lifecycle, and the derived views the
//! board renders.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod store;
pub mod views;

pub use catalog::organization::{organizations, OrgId, Organization};
pub use catalog::path::{find_step, first_step, path_steps, PathStep, RoleResponsibility, StepId};
pub use catalog::CatalogError;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::ids::{NoteId, PersonId, TaskId};
pub use model::person::{MemberStatus, Person, PersonStatus, Standing, RESTORE_FALLBACK_STATUS};
pub use model::task::{Task, TaskNote, DEFAULT_NOTE_AUTHOR};
pub use model::ValidationError;
pub use store::{
    BoardError, BoardResult, BoardSnapshot, BoardStore, PersonEdit, SubscriptionId,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
