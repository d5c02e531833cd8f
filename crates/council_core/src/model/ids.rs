//! Typed entity identifiers.
//!
//! Each id wraps a v4 UUID. Separate types keep a task id from ever being
//! passed where a person id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an id that already exists externally.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(value.trim()).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier of a tracked person.
    PersonId
);
entity_id!(
    /// Identifier of a follow-up task.
    TaskId
);
entity_id!(
    /// Identifier of a note appended to a task.
    NoteId
);

#[cfg(test)]
mod tests {
    use super::{PersonId, TaskId};

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(PersonId::new(), PersonId::new());
        assert!(!TaskId::new().as_uuid().is_nil());
    }

    #[test]
    fn ids_parse_from_display_form() {
        let id = PersonId::new();
        let parsed: PersonId = id.to_string().parse().expect("display form should parse");
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<PersonId>().is_err());
    }
}
