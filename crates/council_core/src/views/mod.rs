//! Derived read models over a board snapshot.
//!
//! # Responsibility
//! - Answer every board query from one `BoardSnapshot`.
//! - Hide archived people and all of their tasks from active views.
//!
//! # Invariants
//! - Views are pure and recomputed on demand; nothing is cached.
//! - Results keep store insertion order unless documented otherwise.
//!
//! See `council` for the joined, catalog-ordered summaries used by the
//! council review screen.

pub mod council;

use crate::catalog::organization::OrgId;
use crate::catalog::path::StepId;
use crate::model::ids::PersonId;
use crate::model::person::Person;
use crate::model::task::Task;
use crate::store::BoardSnapshot;
use std::collections::HashSet;

/// Active people currently at `step`.
pub fn active_people_at_step(snapshot: &BoardSnapshot, step: StepId) -> Vec<&Person> {
    snapshot
        .people()
        .iter()
        .filter(|person| person.current_step == step && person.is_active())
        .collect()
}

pub fn archived_people(snapshot: &BoardSnapshot) -> Vec<&Person> {
    snapshot
        .people()
        .iter()
        .filter(|person| person.is_archived())
        .collect()
}

/// Tasks whose person is not archived.
pub fn active_tasks(snapshot: &BoardSnapshot) -> Vec<&Task> {
    let archived = archived_person_ids(snapshot);
    snapshot
        .tasks()
        .iter()
        .filter(|task| !archived.contains(&task.person_id))
        .collect()
}

/// Open active tasks assigned to `org`. Drives the organization badge.
pub fn pending_count_for_org(snapshot: &BoardSnapshot, org: OrgId) -> usize {
    active_tasks(snapshot)
        .into_iter()
        .filter(|task| task.assigned_to_org == org && task.is_pending())
        .count()
}

/// Active tasks for one person; empty when the person is archived or gone.
pub fn tasks_for_person(snapshot: &BoardSnapshot, person_id: PersonId) -> Vec<&Task> {
    active_tasks(snapshot)
        .into_iter()
        .filter(|task| task.person_id == person_id)
        .collect()
}

/// Completed active tasks in creation order (oldest first).
pub fn completed_tasks_feed(snapshot: &BoardSnapshot) -> Vec<&Task> {
    active_tasks(snapshot)
        .into_iter()
        .filter(|task| task.is_completed)
        .collect()
}

/// Active tasks assigned to `org`, completed ones included.
pub fn tasks_for_org(snapshot: &BoardSnapshot, org: OrgId) -> Vec<&Task> {
    active_tasks(snapshot)
        .into_iter()
        .filter(|task| task.assigned_to_org == org)
        .collect()
}

/// Whether any active task is still open.
pub fn has_pending_tasks(snapshot: &BoardSnapshot) -> bool {
    active_tasks(snapshot).into_iter().any(Task::is_pending)
}

fn archived_person_ids(snapshot: &BoardSnapshot) -> HashSet<PersonId> {
    archived_people(snapshot)
        .into_iter()
        .map(|person| person.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{active_people_at_step, active_tasks, has_pending_tasks, tasks_for_org};
    use crate::catalog::organization::OrgId;
    use crate::catalog::path::StepId;
    use crate::model::person::MemberStatus;
    use crate::store::BoardStore;

    #[test]
    fn step_filter_keeps_insertion_order() {
        let mut store = BoardStore::new();
        let first = store
            .add_person("Uno", MemberStatus::NewConvert, None, StepId::Sacrament)
            .unwrap();
        store
            .add_person("Otro", MemberStatus::NewConvert, None, StepId::Sealing)
            .unwrap();
        let second = store
            .add_person("Dos", MemberStatus::ActiveMember, None, StepId::Sacrament)
            .unwrap();

        let snapshot = store.snapshot();
        let ids: Vec<_> = active_people_at_step(&snapshot, StepId::Sacrament)
            .iter()
            .map(|person| person.id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn org_list_includes_completed_and_badge_tracks_open_work() {
        let mut store = BoardStore::new();
        let person = store
            .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
            .unwrap();
        let task = store.add_task(person, OrgId::Rs, "Ayudar con la ropa").unwrap();
        store.add_task(person, OrgId::Ss, "Clase de preparación").unwrap();

        store.set_task_completed(task, true).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(tasks_for_org(&snapshot, OrgId::Rs).len(), 1);
        assert!(has_pending_tasks(&snapshot));

        store.archive_person(person).unwrap();
        let snapshot = store.snapshot();
        assert!(active_tasks(&snapshot).is_empty());
        assert!(!has_pending_tasks(&snapshot));
    }
}
