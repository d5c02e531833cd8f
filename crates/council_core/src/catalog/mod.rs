//! Static reference catalogs for the council board.
//!
//! # Responsibility
//! - Define the ordered covenant path milestones.
//! - Define the closed set of organizations that receive task assignments.
//!
//! # Invariants
//! - Catalog data is compiled in and immutable for the process lifetime.
//! - Catalog order equals enum declaration order, so `position()` indexes the
//!   backing slice directly.

pub mod organization;
pub mod path;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Parse error for catalog identifiers received as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownStep(String),
    UnknownOrganization(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStep(value) => write!(f, "unknown path step: `{value}`"),
            Self::UnknownOrganization(value) => write!(f, "unknown organization: `{value}`"),
        }
    }
}

impl Error for CatalogError {}
