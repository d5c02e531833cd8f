//! Demo board contents used when a session starts without data.

use super::{BoardResult, BoardStore};
use crate::catalog::organization::OrgId;
use crate::catalog::path::StepId;
use crate::model::person::MemberStatus;

impl BoardStore {
    /// Builds a store seeded with three people and two tasks, one of them
    /// completed with a progress note.
    pub fn with_sample_data() -> BoardResult<Self> {
        let mut store = Self::new();

        let family = store.add_person(
            "Familia Ramírez",
            MemberStatus::FriendInvestigator,
            Some("51999999999"),
            StepId::Baptism,
        )?;
        store.add_person(
            "Jorge González",
            MemberStatus::LessActive,
            None,
            StepId::Ordination,
        )?;
        store.add_person(
            "Ana Silva",
            MemberStatus::NewConvert,
            Some("15551234567"),
            StepId::Endowment,
        )?;

        store.add_task(family, OrgId::Eq, "Invitar a Noche de Hogar")?;
        let integration = store.add_task(
            family,
            OrgId::Pri,
            "Integrar a los hijos en la clase de Valientes",
        )?;
        store.set_task_completed(integration, true)?;
        store.add_task_note(
            integration,
            "Pres. Primaria",
            "Los niños asistieron el domingo pasado y se sintieron muy bien.",
        )?;

        Ok(store)
    }
}
