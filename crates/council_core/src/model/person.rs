//! Person domain model.
//!
//! # Responsibility
//! - Define the tracked person record and its membership status.
//! - Provide archive/restore lifecycle helpers (soft delete).
//!
//! # Invariants
//! - `name` is trimmed and never blank.
//! - A previous status exists only while the person is archived. This is
//!   enforced by `Standing`, not by convention.
//! - Restoring without a recorded previous status falls back to
//!   `MemberStatus::LessActive`.

use super::ids::PersonId;
use super::{normalize_text, ValidationError};
use crate::catalog::path::StepId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid digit regex"));

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Status a restored person falls back to when none was recorded.
pub const RESTORE_FALLBACK_STATUS: MemberStatus = MemberStatus::LessActive;

/// Membership status of a person who is not archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    FriendInvestigator,
    NewConvert,
    LessActive,
    ActiveMember,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 4] = [
        Self::FriendInvestigator,
        Self::NewConvert,
        Self::LessActive,
        Self::ActiveMember,
    ];

    /// Board label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FriendInvestigator => "Amigo/Investigador",
            Self::NewConvert => "Nuevo Converso",
            Self::LessActive => "Menos Activo",
            Self::ActiveMember => "Miembro Activo",
        }
    }
}

/// Full status enumeration as shown on the board, `Archived` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonStatus {
    FriendInvestigator,
    NewConvert,
    LessActive,
    ActiveMember,
    Archived,
}

impl PersonStatus {
    pub fn label(self) -> &'static str {
        match self.as_member() {
            Some(member) => member.label(),
            None => "Archivado",
        }
    }

    /// Returns the member status, or `None` for `Archived`.
    pub fn as_member(self) -> Option<MemberStatus> {
        match self {
            Self::FriendInvestigator => Some(MemberStatus::FriendInvestigator),
            Self::NewConvert => Some(MemberStatus::NewConvert),
            Self::LessActive => Some(MemberStatus::LessActive),
            Self::ActiveMember => Some(MemberStatus::ActiveMember),
            Self::Archived => None,
        }
    }
}

impl From<MemberStatus> for PersonStatus {
    fn from(value: MemberStatus) -> Self {
        match value {
            MemberStatus::FriendInvestigator => Self::FriendInvestigator,
            MemberStatus::NewConvert => Self::NewConvert,
            MemberStatus::LessActive => Self::LessActive,
            MemberStatus::ActiveMember => Self::ActiveMember,
        }
    }
}

/// Where a person stands in the active/archived lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Active(MemberStatus),
    Archived { previous: Option<MemberStatus> },
}

/// A person tracked along the covenant path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub current_step: StepId,
    pub phone: Option<String>,
    standing: Standing,
}

impl Person {
    /// Creates an active person with a generated id.
    ///
    /// `name` is trimmed; a blank phone is stored as `None`.
    ///
    /// # Errors
    /// - `ValidationError::BlankName` when `name` is blank after trim.
    pub fn new(
        name: &str,
        status: MemberStatus,
        phone: Option<&str>,
        current_step: StepId,
    ) -> Result<Self, ValidationError> {
        let name = normalize_text(name).ok_or(ValidationError::BlankName)?;
        Ok(Self {
            id: PersonId::new(),
            name,
            current_step,
            phone: normalize_phone(phone),
            standing: Standing::Active(status),
        })
    }

    pub fn standing(&self) -> Standing {
        self.standing
    }

    /// Board-level status, `Archived` included.
    pub fn status(&self) -> PersonStatus {
        match self.standing {
            Standing::Active(status) => status.into(),
            Standing::Archived { .. } => PersonStatus::Archived,
        }
    }

    /// Status displaced by archiving. Always `None` for active people.
    pub fn previous_status(&self) -> Option<MemberStatus> {
        match self.standing {
            Standing::Active(_) => None,
            Standing::Archived { previous } => previous,
        }
    }

    pub fn is_archived(&self) -> bool {
        matches!(self.standing, Standing::Archived { .. })
    }

    pub fn is_active(&self) -> bool {
        !self.is_archived()
    }

    /// Soft-deletes this person, recording the displaced status.
    ///
    /// Returns `false` when already archived; the recorded previous status is
    /// left as is.
    pub fn archive(&mut self) -> bool {
        match self.standing {
            Standing::Active(status) => {
                self.standing = Standing::Archived {
                    previous: Some(status),
                };
                true
            }
            Standing::Archived { .. } => false,
        }
    }

    /// Undoes `archive`. Returns `false` when the person was not archived.
    pub fn restore(&mut self) -> bool {
        match self.standing {
            Standing::Archived { previous } => {
                self.standing = Standing::Active(previous.unwrap_or(RESTORE_FALLBACK_STATUS));
                true
            }
            Standing::Active(_) => false,
        }
    }

    /// Click-to-chat link built from the phone digits.
    ///
    /// Returns `None` when there is no phone or it contains no digits.
    pub fn whatsapp_url(&self) -> Option<String> {
        let phone = self.phone.as_deref()?;
        let digits = NON_DIGIT_RE.replace_all(phone, "");
        if digits.is_empty() {
            return None;
        }
        Some(format!("{WHATSAPP_BASE_URL}{digits}"))
    }
}

/// Trims a phone; blank input becomes `None`.
pub(crate) fn normalize_phone(phone: Option<&str>) -> Option<String> {
    phone.and_then(normalize_text)
}

/// Wire shape of `Person`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: String,
    status: PersonStatus,
    #[serde(default)]
    previous_status: Option<MemberStatus>,
    current_step: StepId,
    #[serde(default)]
    phone: Option<String>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = ValidationError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let name = normalize_text(&record.name).ok_or(ValidationError::BlankName)?;
        let standing = match (record.status.as_member(), record.previous_status) {
            (None, previous) => Standing::Archived { previous },
            (Some(status), None) => Standing::Active(status),
            (Some(_), Some(_)) => return Err(ValidationError::PreviousStatusWhileActive),
        };
        Ok(Self {
            id: record.id,
            name,
            current_step: record.current_step,
            phone: normalize_phone(record.phone.as_deref()),
            standing,
        })
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            status: person.status(),
            previous_status: person.previous_status(),
            name: person.name,
            current_step: person.current_step,
            phone: person.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberStatus, Person, PersonStatus, Standing};
    use crate::catalog::path::StepId;
    use crate::model::ValidationError;

    fn sample(status: MemberStatus) -> Person {
        Person::new("Ana Silva", status, None, StepId::Endowment).expect("valid person")
    }

    #[test]
    fn new_trims_name_and_drops_blank_phone() {
        let person = Person::new(
            "  Jorge  ",
            MemberStatus::LessActive,
            Some("   "),
            StepId::Ordination,
        )
        .unwrap();
        assert_eq!(person.name, "Jorge");
        assert_eq!(person.phone, None);
        assert_eq!(person.status(), PersonStatus::LessActive);
        assert_eq!(person.previous_status(), None);
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Person::new(" ", MemberStatus::NewConvert, None, StepId::Baptism).unwrap_err();
        assert_eq!(err, ValidationError::BlankName);
    }

    #[test]
    fn archive_records_previous_and_is_idempotent() {
        let mut person = sample(MemberStatus::NewConvert);
        assert!(person.archive());
        assert!(!person.archive());
        assert_eq!(
            person.standing(),
            Standing::Archived {
                previous: Some(MemberStatus::NewConvert)
            }
        );
        assert_eq!(person.status(), PersonStatus::Archived);
    }

    #[test]
    fn restore_returns_previous_status() {
        let mut person = sample(MemberStatus::ActiveMember);
        person.archive();
        assert!(person.restore());
        assert_eq!(person.status(), PersonStatus::ActiveMember);
        assert_eq!(person.previous_status(), None);
        assert!(!person.restore());
    }

    #[test]
    fn whatsapp_url_strips_formatting() {
        let mut person = sample(MemberStatus::NewConvert);
        assert_eq!(person.whatsapp_url(), None);

        person.phone = Some("+1 (555) 123-4567".to_string());
        assert_eq!(
            person.whatsapp_url().as_deref(),
            Some("https://wa.me/15551234567")
        );

        person.phone = Some("n/a".to_string());
        assert_eq!(person.whatsapp_url(), None);
    }

    #[test]
    fn labels_match_board_wording() {
        assert_eq!(PersonStatus::Archived.label(), "Archivado");
        assert_eq!(
            PersonStatus::from(MemberStatus::FriendInvestigator).label(),
            "Amigo/Investigador"
        );
    }
}
