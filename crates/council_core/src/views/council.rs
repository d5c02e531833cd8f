//! Council review summaries joined with catalog metadata.

use super::{active_people_at_step, completed_tasks_feed, pending_count_for_org};
use crate::catalog::organization::{organizations, Organization};
use crate::catalog::path::{path_steps, PathStep};
use crate::model::person::Person;
use crate::model::task::Task;
use crate::store::BoardSnapshot;

/// Open task count for one organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgPending {
    pub organization: &'static Organization,
    pub pending: usize,
}

/// Active people grouped under one path step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepGroup<'a> {
    pub step: &'static PathStep,
    pub people: Vec<&'a Person>,
}

/// Completed task with the names needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry<'a> {
    pub task: &'a Task,
    /// `None` only if the owner is missing from the snapshot.
    pub person_name: Option<&'a str>,
    pub org_name: &'static str,
}

/// Pending counts for every organization, in catalog order.
pub fn pending_summary(snapshot: &BoardSnapshot) -> Vec<OrgPending> {
    organizations()
        .iter()
        .map(|organization| OrgPending {
            organization,
            pending: pending_count_for_org(snapshot, organization.id),
        })
        .collect()
}

/// Active people per step in path order. Steps with nobody are skipped.
pub fn people_by_step(snapshot: &BoardSnapshot) -> Vec<StepGroup<'_>> {
    path_steps()
        .iter()
        .filter_map(|step| {
            let people = active_people_at_step(snapshot, step.id);
            if people.is_empty() {
                None
            } else {
                Some(StepGroup { step, people })
            }
        })
        .collect()
}

/// Completed feed joined with person and organization names.
pub fn completed_feed_entries(snapshot: &BoardSnapshot) -> Vec<FeedEntry<'_>> {
    completed_tasks_feed(snapshot)
        .into_iter()
        .map(|task| FeedEntry {
            task,
            person_name: snapshot
                .person(task.person_id)
                .map(|person| person.name.as_str()),
            org_name: task.assigned_to_org.name(),
        })
        .collect()
}
