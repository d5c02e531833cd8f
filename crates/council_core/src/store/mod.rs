//! In-memory entity state store.
//!
//! # Responsibility
//! - Own the Person and Task collections for one board session.
//! - Apply every lifecycle transition and publish versioned snapshots.
//!
//! # Invariants
//! - A rejected operation leaves both collections and the version untouched.
//! - Every applied transition bumps `version` by exactly one.
//! - A task never outlives its person: purge removes the person's tasks too.
//! - Archive is reversible and keeps tasks; purge is not.
//! - Collections keep insertion order. Lookups are linear scans by id.

mod sample;

use crate::catalog::organization::OrgId;
use crate::catalog::path::StepId;
use crate::model::ids::{NoteId, PersonId, TaskId};
use crate::model::person::{normalize_phone, MemberStatus, Person};
use crate::model::task::{Task, TaskNote};
use crate::model::{normalize_text, ValidationError};
use log::{debug, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

pub type BoardResult<T> = Result<T, BoardError>;

/// Store operation outcome when a command does not apply.
///
/// None of these are fatal. The board UI usually discards them; they exist so
/// callers and tests can tell a rejected command from an applied one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Blank name, description or note text.
    Validation(ValidationError),
    PersonNotFound(PersonId),
    TaskNotFound(TaskId),
}

impl BoardError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PersonNotFound(_) | Self::TaskNotFound(_))
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid_input",
            Self::PersonNotFound(_) => "person_not_found",
            Self::TaskNotFound(_) => "task_not_found",
        }
    }
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PersonNotFound(id) => write!(f, "person not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PersonNotFound(_) | Self::TaskNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for BoardError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Immutable view of the board at one version.
///
/// Cloning is cheap: both collections are shared.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    version: u64,
    people: Arc<Vec<Person>>,
    tasks: Arc<Vec<Task>>,
}

impl BoardSnapshot {
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// True when both snapshots share the same people collection.
    pub fn same_people(&self, other: &BoardSnapshot) -> bool {
        Arc::ptr_eq(&self.people, &other.people)
    }

    /// True when both snapshots share the same task collection.
    pub fn same_tasks(&self, other: &BoardSnapshot) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

/// Handle returned by `BoardStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BoardSnapshot)>;

/// Full replacement values for the board's "edit person" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonEdit {
    pub name: String,
    pub phone: Option<String>,
    pub step: StepId,
}

/// Single-session store for people and tasks.
#[derive(Default)]
pub struct BoardStore {
    version: u64,
    people: Arc<Vec<Person>>,
    tasks: Arc<Vec<Task>>,
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_subscription: u64,
}

impl Debug for BoardStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("version", &self.version)
            .field("people", &self.people.len())
            .field("tasks", &self.tasks.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            version: self.version,
            people: Arc::clone(&self.people),
            tasks: Arc::clone(&self.tasks),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Registers a listener called with the new snapshot after every applied
    /// transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&BoardSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes a listener. Returns `false` for an unknown handle.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Adds an active person at `step`, the step selected by the caller.
    ///
    /// # Errors
    /// - `BoardError::Validation` when `name` is blank.
    pub fn add_person(
        &mut self,
        name: &str,
        status: MemberStatus,
        phone: Option<&str>,
        step: StepId,
    ) -> BoardResult<PersonId> {
        let person =
            Person::new(name, status, phone, step).or_else(|err| reject("person_add", err.into()))?;
        let id = person.id;
        Arc::make_mut(&mut self.people).push(person);
        info!(
            "event=person_add module=store status=ok person_id={} step={}",
            id, step
        );
        self.commit();
        Ok(id)
    }

    /// Replaces name and phone. Status and step are untouched.
    pub fn update_person(
        &mut self,
        id: PersonId,
        name: &str,
        phone: Option<&str>,
    ) -> BoardResult<()> {
        let name = normalize_text(name)
            .ok_or(ValidationError::BlankName)
            .or_else(|err| reject("person_update", err.into()))?;
        let index = self.person_index("person_update", id)?;
        let person = &mut Arc::make_mut(&mut self.people)[index];
        person.name = name;
        person.phone = normalize_phone(phone);
        info!("event=person_update module=store status=ok person_id={id}");
        self.commit();
        Ok(())
    }

    pub fn move_person_to_step(&mut self, id: PersonId, step: StepId) -> BoardResult<()> {
        let index = self.person_index("person_move", id)?;
        Arc::make_mut(&mut self.people)[index].current_step = step;
        info!("event=person_move module=store status=ok person_id={id} step={step}");
        self.commit();
        Ok(())
    }

    /// Applies the edit form in one transition: name and phone always, step
    /// only when it differs from the current one.
    pub fn edit_person(&mut self, id: PersonId, edit: &PersonEdit) -> BoardResult<()> {
        let name = normalize_text(&edit.name)
            .ok_or(ValidationError::BlankName)
            .or_else(|err| reject("person_edit", err.into()))?;
        let index = self.person_index("person_edit", id)?;
        let person = &mut Arc::make_mut(&mut self.people)[index];
        let moved = person.current_step != edit.step;
        person.name = name;
        person.phone = normalize_phone(edit.phone.as_deref());
        if moved {
            person.current_step = edit.step;
        }
        info!(
            "event=person_edit module=store status=ok person_id={} moved={}",
            id, moved
        );
        self.commit();
        Ok(())
    }

    /// Soft-deletes a person. Their tasks stay but leave every active view.
    ///
    /// Returns `Ok(false)` when the person was already archived; the recorded
    /// previous status is preserved and no new snapshot is published.
    pub fn archive_person(&mut self, id: PersonId) -> BoardResult<bool> {
        let index = self.person_index("person_archive", id)?;
        if self.people[index].is_archived() {
            debug!("event=person_archive module=store status=noop person_id={id}");
            return Ok(false);
        }
        Arc::make_mut(&mut self.people)[index].archive();
        info!("event=person_archive module=store status=ok person_id={id}");
        self.commit();
        Ok(true)
    }

    /// Undoes `archive_person`, falling back to "less active" when no previous
    /// status was recorded.
    ///
    /// Returns `Ok(false)` when the person was not archived.
    pub fn restore_person(&mut self, id: PersonId) -> BoardResult<bool> {
        let index = self.person_index("person_restore", id)?;
        if self.people[index].is_active() {
            debug!("event=person_restore module=store status=noop person_id={id}");
            return Ok(false);
        }
        let person = &mut Arc::make_mut(&mut self.people)[index];
        person.restore();
        info!(
            "event=person_restore module=store status=ok person_id={} restored_status={:?}",
            id,
            person.status()
        );
        self.commit();
        Ok(true)
    }

    /// Hard-deletes a person and every task that references them.
    ///
    /// Returns the number of tasks removed with the person.
    pub fn purge_person(&mut self, id: PersonId) -> BoardResult<usize> {
        self.person_index("person_purge", id)?;
        Arc::make_mut(&mut self.people).retain(|person| person.id != id);

        let owned_tasks = self.tasks.iter().filter(|task| task.person_id == id).count();
        if owned_tasks > 0 {
            Arc::make_mut(&mut self.tasks).retain(|task| task.person_id != id);
        }
        info!(
            "event=person_purge module=store status=ok person_id={} removed_tasks={}",
            id, owned_tasks
        );
        self.commit();
        Ok(owned_tasks)
    }

    /// Creates an open task for an existing person.
    ///
    /// # Errors
    /// - `BoardError::Validation` when `description` is blank.
    /// - `BoardError::PersonNotFound` when `person_id` is unknown.
    pub fn add_task(
        &mut self,
        person_id: PersonId,
        org: OrgId,
        description: &str,
    ) -> BoardResult<TaskId> {
        let task =
            Task::new(person_id, org, description).or_else(|err| reject("task_add", err.into()))?;
        self.person_index("task_add", person_id)?;
        let id = task.id;
        Arc::make_mut(&mut self.tasks).push(task);
        info!(
            "event=task_add module=store status=ok task_id={} person_id={} org={}",
            id, person_id, org
        );
        self.commit();
        Ok(id)
    }

    pub fn update_task(&mut self, id: TaskId, description: &str, org: OrgId) -> BoardResult<()> {
        let description = normalize_text(description)
            .ok_or(ValidationError::BlankDescription)
            .or_else(|err| reject("task_update", err.into()))?;
        let index = self.task_index("task_update", id)?;
        let task = &mut Arc::make_mut(&mut self.tasks)[index];
        task.description = description;
        task.assigned_to_org = org;
        info!("event=task_update module=store status=ok task_id={id} org={org}");
        self.commit();
        Ok(())
    }

    /// Sets the completion flag. Setting the current value publishes nothing.
    pub fn set_task_completed(&mut self, id: TaskId, completed: bool) -> BoardResult<()> {
        let index = self.task_index("task_complete", id)?;
        if self.tasks[index].is_completed == completed {
            return Ok(());
        }
        Arc::make_mut(&mut self.tasks)[index].is_completed = completed;
        info!(
            "event=task_complete module=store status=ok task_id={} completed={}",
            id, completed
        );
        self.commit();
        Ok(())
    }

    /// Appends a note to a task. Notes are never edited or removed.
    pub fn add_task_note(&mut self, id: TaskId, author: &str, text: &str) -> BoardResult<NoteId> {
        let note = TaskNote::new(author, text).or_else(|err| reject("task_note", err.into()))?;
        let index = self.task_index("task_note", id)?;
        let note_id = note.id;
        let task = &mut Arc::make_mut(&mut self.tasks)[index];
        task.append_note(note);
        info!(
            "event=task_note module=store status=ok task_id={} note_id={} note_count={}",
            id,
            note_id,
            task.notes().len()
        );
        self.commit();
        Ok(note_id)
    }

    fn person_index(&self, event: &str, id: PersonId) -> BoardResult<usize> {
        match self.people.iter().position(|person| person.id == id) {
            Some(index) => Ok(index),
            None => reject(event, BoardError::PersonNotFound(id)),
        }
    }

    fn task_index(&self, event: &str, id: TaskId) -> BoardResult<usize> {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => Ok(index),
            None => reject(event, BoardError::TaskNotFound(id)),
        }
    }

    fn commit(&mut self) {
        self.version += 1;
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in self.listeners.values_mut() {
            listener(&snapshot);
        }
    }
}

fn reject<T>(event: &str, err: BoardError) -> BoardResult<T> {
    debug!(
        "event={} module=store status=rejected error_code={}",
        event,
        err.code()
    );
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::{BoardError, BoardStore, PersonEdit};
    use crate::catalog::organization::OrgId;
    use crate::catalog::path::StepId;
    use crate::model::ids::{PersonId, TaskId};
    use crate::model::person::MemberStatus;
    use crate::model::ValidationError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rejected_commands_leave_version_untouched() {
        let mut store = BoardStore::new();
        let err = store
            .add_person("   ", MemberStatus::FriendInvestigator, None, StepId::Baptism)
            .unwrap_err();
        assert_eq!(err, BoardError::Validation(ValidationError::BlankName));

        let missing = PersonId::new();
        assert_eq!(
            store.archive_person(missing),
            Err(BoardError::PersonNotFound(missing))
        );
        assert!(store
            .set_task_completed(TaskId::new(), true)
            .unwrap_err()
            .is_not_found());
        assert_eq!(store.version(), 0);
        assert!(store.people().is_empty());
    }

    #[test]
    fn snapshots_are_not_affected_by_later_mutations() {
        let mut store = BoardStore::new();
        let id = store
            .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
            .unwrap();
        let before = store.snapshot();

        store.update_person(id, "Ana Silva", Some("155")).unwrap();

        assert_eq!(before.person(id).unwrap().name, "Ana");
        assert_eq!(store.person(id).unwrap().name, "Ana Silva");
        assert_eq!(store.snapshot().version(), before.version() + 1);
        assert!(!store.snapshot().same_people(&before));
        assert!(store.snapshot().same_tasks(&before));
    }

    #[test]
    fn listeners_receive_each_new_version_until_unsubscribed() {
        let mut store = BoardStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.version()));

        let id = store
            .add_person("Jorge", MemberStatus::LessActive, None, StepId::Ordination)
            .unwrap();
        store.archive_person(id).unwrap();
        store.archive_person(id).unwrap();
        assert!(store.unsubscribe(subscription));
        store.restore_person(id).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert!(!store.unsubscribe(subscription));
    }

    #[test]
    fn edit_person_moves_only_when_step_changes() {
        let mut store = BoardStore::new();
        let id = store
            .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
            .unwrap();
        store
            .edit_person(
                id,
                &PersonEdit {
                    name: "Ana Silva".to_string(),
                    phone: Some("15551234567".to_string()),
                    step: StepId::Sealing,
                },
            )
            .unwrap();

        let person = store.person(id).unwrap();
        assert_eq!(person.current_step, StepId::Sealing);
        assert_eq!(person.phone.as_deref(), Some("15551234567"));
        assert_eq!(store.version(), 2);

        let err = store
            .edit_person(
                id,
                &PersonEdit {
                    name: " ".to_string(),
                    phone: None,
                    step: StepId::Baptism,
                },
            )
            .unwrap_err();
        assert_eq!(err, BoardError::Validation(ValidationError::BlankName));
        assert_eq!(store.person(id).unwrap().current_step, StepId::Sealing);
    }

    #[test]
    fn add_task_validates_description_before_person() {
        let mut store = BoardStore::new();
        let err = store.add_task(PersonId::new(), OrgId::Eq, "").unwrap_err();
        assert_eq!(err, BoardError::Validation(ValidationError::BlankDescription));
    }

    #[test]
    fn completing_with_same_value_publishes_nothing() {
        let mut store = BoardStore::new();
        let person = store
            .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
            .unwrap();
        let task = store.add_task(person, OrgId::Rs, "Ayudar con la ropa").unwrap();
        let version = store.version();

        store.set_task_completed(task, false).unwrap();
        assert_eq!(store.version(), version);
        store.set_task_completed(task, true).unwrap();
        assert_eq!(store.version(), version + 1);
    }
}
