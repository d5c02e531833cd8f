//! Organization catalog.

use super::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Organization that can own follow-up tasks.
///
/// Serialized as the short uppercase code (`EQ`, `RS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrgId {
    /// Elders quorum.
    Eq,
    /// Relief Society.
    Rs,
    /// Young men.
    Ym,
    /// Young women.
    Yw,
    /// Primary.
    Pri,
    /// Sunday school.
    Ss,
}

impl OrgId {
    /// All organizations in catalog order.
    pub const ALL: [OrgId; 6] = [
        Self::Eq,
        Self::Rs,
        Self::Ym,
        Self::Yw,
        Self::Pri,
        Self::Ss,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Rs => "RS",
            Self::Ym => "YM",
            Self::Yw => "YW",
            Self::Pri => "PRI",
            Self::Ss => "SS",
        }
    }

    pub fn organization(self) -> &'static Organization {
        &ORGANIZATIONS[self as usize]
    }

    /// Display name, e.g. `Sociedad de Socorro`.
    pub fn name(self) -> &'static str {
        self.organization().name
    }
}

impl Display for OrgId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OrgId {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|org| org.code().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| CatalogError::UnknownOrganization(normalized.to_string()))
    }
}

/// Organization display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub id: OrgId,
    pub name: &'static str,
    /// Accent color token used by the board for badges.
    pub color: &'static str,
}

pub fn organizations() -> &'static [Organization] {
    ORGANIZATIONS
}

static ORGANIZATIONS: &[Organization] = &[
    Organization {
        id: OrgId::Eq,
        name: "Cuórum de Élderes",
        color: "orange",
    },
    Organization {
        id: OrgId::Rs,
        name: "Sociedad de Socorro",
        color: "pink",
    },
    Organization {
        id: OrgId::Ym,
        name: "Hombres Jóvenes",
        color: "teal",
    },
    Organization {
        id: OrgId::Yw,
        name: "Mujeres Jóvenes",
        color: "purple",
    },
    Organization {
        id: OrgId::Pri,
        name: "Primaria",
        color: "yellow",
    },
    Organization {
        id: OrgId::Ss,
        name: "Escuela Dominical",
        color: "indigo",
    },
];

#[cfg(test)]
mod tests {
    use super::{organizations, OrgId};
    use crate::catalog::CatalogError;

    #[test]
    fn catalog_entries_line_up_with_ids() {
        assert_eq!(organizations().len(), OrgId::ALL.len());
        for org in OrgId::ALL {
            assert_eq!(org.organization().id, org);
        }
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("EQ".parse::<OrgId>(), Ok(OrgId::Eq));
        assert_eq!(" pri ".parse::<OrgId>(), Ok(OrgId::Pri));
        assert_eq!(
            "HP".parse::<OrgId>(),
            Err(CatalogError::UnknownOrganization("HP".to_string()))
        );
    }

    #[test]
    fn names_come_from_catalog() {
        assert_eq!(OrgId::Rs.name(), "Sociedad de Socorro");
        assert_eq!(OrgId::Ss.name(), "Escuela Dominical");
    }
}
