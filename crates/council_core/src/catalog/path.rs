//! Covenant path catalog.
//!
//! Six milestones, in the order a person is expected to progress through them.
//! Each milestone carries the meeting that leads the effort and the council
//! roles with their suggested responsibilities.

use super::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identifier of one covenant path milestone.
///
/// Serialized as its slug (`baptism`, `temple_history`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Baptism,
    TempleHistory,
    Sacrament,
    Ordination,
    Endowment,
    Sealing,
}

impl StepId {
    /// All steps in path order.
    pub const ALL: [StepId; 6] = [
        Self::Baptism,
        Self::TempleHistory,
        Self::Sacrament,
        Self::Ordination,
        Self::Endowment,
        Self::Sealing,
    ];

    /// Stable slug used on the wire and in UI selectors.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baptism => "baptism",
            Self::TempleHistory => "temple_history",
            Self::Sacrament => "sacrament",
            Self::Ordination => "ordination",
            Self::Endowment => "endowment",
            Self::Sealing => "sealing",
        }
    }

    /// Zero-based position along the path.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Catalog entry for this step.
    pub fn step(self) -> &'static PathStep {
        &PATH_STEPS[self.position()]
    }
}

impl Display for StepId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepId {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownStep(normalized.to_string()))
    }
}

/// One council role and the work it usually owns at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleResponsibility {
    pub role: &'static str,
    pub tasks: &'static [&'static str],
}

/// Milestone definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    /// Which coordination meeting leads the effort at this step.
    pub meeting_focus: &'static str,
    pub council_focus: &'static [RoleResponsibility],
}

impl PathStep {
    /// Position along the path, same as `self.id.position()`.
    pub fn position(&self) -> usize {
        self.id.position()
    }
}

/// Returns the full path in order.
pub fn path_steps() -> &'static [PathStep] {
    PATH_STEPS
}

/// Returns the step a new session starts on.
pub fn first_step() -> &'static PathStep {
    &PATH_STEPS[0]
}

/// Looks up a step by slug.
pub fn find_step(slug: &str) -> Option<&'static PathStep> {
    slug.parse::<StepId>().ok().map(StepId::step)
}

static PATH_STEPS: &[PathStep] = &[
    PathStep {
        id: StepId::Baptism,
        title: "Bautismo y Confirmación",
        description: "La puerta de entrada a la senda de los convenios.",
        meeting_focus: "La Reunión de Coordinación Misional lidera el esfuerzo, apoyada por el Consejo de Barrio para la integración.",
        council_focus: &[
            RoleResponsibility {
                role: "Líder Misional de Barrio",
                tasks: &[
                    "Coordinar con misioneros de tiempo completo",
                    "Planear servicios bautismales",
                    "Asegurar la enseñanza de lecciones misionales",
                ],
            },
            RoleResponsibility {
                role: "Obispado",
                tasks: &[
                    "Realizar entrevistas de bautismo (para niños de 8 años)",
                    "Supervisar la ordenanza",
                ],
            },
            RoleResponsibility {
                role: "Organizaciones (Primaria/SA/SE)",
                tasks: &[
                    "Asignar amigos ministrantes",
                    "Preparar el ambiente social para la bienvenida",
                ],
            },
        ],
    },
    PathStep {
        id: StepId::TempleHistory,
        title: "Templo e Historia Familiar",
        description: "Volver el corazón a los padres y servicio vicario.",
        meeting_focus: "Coordinación de Templo e Historia Familiar y Consejo de Barrio.",
        council_focus: &[
            RoleResponsibility {
                role: "Consultores de Templo e HF",
                tasks: &[
                    "Ayudar al nuevo miembro a crear cuenta FamilySearch",
                    "Enseñar a ingresar las 4 generaciones",
                    "Preparar tarjetas para bautismos vicarios",
                ],
            },
            RoleResponsibility {
                role: "Obispado",
                tasks: &[
                    "Entrevista para recomendación de uso limitado",
                    "Fomentar la asistencia al templo para bautismos",
                ],
            },
            RoleResponsibility {
                role: "Pdte. Cuórum y Soc. Socorro",
                tasks: &[
                    "Organizar visitas al templo con nuevos miembros",
                    "Asegurar que tengan transporte y compañía",
                ],
            },
        ],
    },
    PathStep {
        id: StepId::Sacrament,
        title: "Santa Cena (Renovación)",
        description: "Renovación semanal de convenios y retención.",
        meeting_focus: "El Consejo de Barrio revisa la asistencia y el bienestar espiritual.",
        council_focus: &[
            RoleResponsibility {
                role: "Obispado",
                tasks: &[
                    "Presidir la reunión sacramental",
                    "Asegurar la dignidad al participar",
                ],
            },
            RoleResponsibility {
                role: "Cuórum de Élderes y S. Socorro",
                tasks: &[
                    "Ministración a miembros menos activos",
                    "Identificar necesidades temporales y espirituales",
                ],
            },
        ],
    },
    PathStep {
        id: StepId::Ordination,
        title: "Ordenación al Sacerdocio",
        description: "Conferir el Sacerdocio Aarónico y de Melquisedec.",
        meeting_focus: "Coordinación de Presidencias de Cuórum y Obispado.",
        council_focus: &[
            RoleResponsibility {
                role: "Pdte. Cuórum de Élderes",
                tasks: &[
                    "Preparar a los futuros élderes",
                    "Entrevistar y recomendar (junto al Obispo)",
                ],
            },
            RoleResponsibility {
                role: "Obispado",
                tasks: &[
                    "Supervisar el Sacerdocio Aarónico",
                    "Entrevistas de dignidad",
                ],
            },
        ],
    },
    PathStep {
        id: StepId::Endowment,
        title: "Investidura",
        description: "Recibir poder de lo alto en la Casa del Señor.",
        meeting_focus: "Reunión de Coordinación de Templo e Historia Familiar.",
        council_focus: &[
            RoleResponsibility {
                role: "Líder de Templo e HF",
                tasks: &[
                    "Coordinar clases de preparación para el templo",
                    "Ayudar con tarjetas de ordenanzas familiares",
                ],
            },
            RoleResponsibility {
                role: "Sociedad de Socorro",
                tasks: &[
                    "Inspirar a las hermanas a prepararse",
                    "Ayudar con la ropa del templo",
                ],
            },
            RoleResponsibility {
                role: "Obispo",
                tasks: &["Entrevista para recomendación de uso limitado o viva"],
            },
        ],
    },
    PathStep {
        id: StepId::Sealing,
        title: "Sellamiento",
        description: "Unir a las familias por la eternidad.",
        meeting_focus: "Esfuerzo conjunto del Consejo de Barrio y Coordinación de Templo.",
        council_focus: &[
            RoleResponsibility {
                role: "Consultores de Templo e HF",
                tasks: &[
                    "Ayudar a encontrar antepasados para sellamientos",
                    "Enseñar a usar FamilySearch",
                ],
            },
            RoleResponsibility {
                role: "Cuórum de Élderes y S. Socorro",
                tasks: &[
                    "Fomentar la asistencia regular al templo",
                    "Organizar viajes al templo",
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::{find_step, first_step, path_steps, StepId};
    use crate::catalog::CatalogError;

    #[test]
    fn catalog_order_matches_step_positions() {
        assert_eq!(path_steps().len(), StepId::ALL.len());
        for (index, step) in path_steps().iter().enumerate() {
            assert_eq!(step.id.position(), index);
            assert_eq!(StepId::ALL[index], step.id);
        }
    }

    #[test]
    fn every_step_has_council_focus() {
        for step in path_steps() {
            assert!(!step.council_focus.is_empty(), "{} has no roles", step.id);
            assert!(step.council_focus.iter().all(|role| !role.tasks.is_empty()));
        }
    }

    #[test]
    fn slugs_round_trip_through_from_str() {
        for step in StepId::ALL {
            assert_eq!(step.as_str().parse::<StepId>(), Ok(step));
        }
        assert_eq!(" sealing ".parse::<StepId>(), Ok(StepId::Sealing));
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(
            "mission".parse::<StepId>(),
            Err(CatalogError::UnknownStep("mission".to_string()))
        );
        assert!(find_step("mission").is_none());
    }

    #[test]
    fn first_step_is_baptism() {
        assert_eq!(first_step().id, StepId::Baptism);
        assert_eq!(
            find_step("temple_history").map(|step| step.title),
            Some("Templo e Historia Familiar")
        );
    }
}
