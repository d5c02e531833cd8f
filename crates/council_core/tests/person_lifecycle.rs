use council_core::views::{active_people_at_step, archived_people};
use council_core::{
    BoardError, BoardStore, MemberStatus, PersonId, PersonStatus, StepId, ValidationError,
};
use std::collections::HashSet;

#[test]
fn add_person_uses_caller_step_and_fresh_ids() {
    let mut store = BoardStore::new();
    let mut ids = HashSet::new();

    for step in StepId::ALL {
        let id = store
            .add_person("Familia Ramírez", MemberStatus::FriendInvestigator, None, step)
            .unwrap();
        assert!(ids.insert(id), "id {id} was reused");

        let person = store.person(id).unwrap();
        assert_eq!(person.name, "Familia Ramírez");
        assert_eq!(person.status(), PersonStatus::FriendInvestigator);
        assert_eq!(person.current_step, step);
        assert_eq!(person.previous_status(), None);
    }
}

#[test]
fn blank_name_is_declined_without_side_effects() {
    let mut store = BoardStore::new();
    let err = store
        .add_person(" \t ", MemberStatus::FriendInvestigator, Some("51999999999"), StepId::Baptism)
        .unwrap_err();

    assert_eq!(err, BoardError::Validation(ValidationError::BlankName));
    assert!(store.people().is_empty());
    assert_eq!(store.version(), 0);
}

#[test]
fn update_person_keeps_status_and_step() {
    let mut store = BoardStore::new();
    let id = store
        .add_person("Jorge", MemberStatus::LessActive, None, StepId::Ordination)
        .unwrap();

    store
        .update_person(id, "Jorge González", Some(" 51 999 "))
        .unwrap();

    let person = store.person(id).unwrap();
    assert_eq!(person.name, "Jorge González");
    assert_eq!(person.phone.as_deref(), Some("51 999"));
    assert_eq!(person.status(), PersonStatus::LessActive);
    assert_eq!(person.current_step, StepId::Ordination);

    store.update_person(id, "Jorge González", Some("")).unwrap();
    assert_eq!(store.person(id).unwrap().phone, None);
}

#[test]
fn unknown_person_operations_are_no_ops() {
    let mut store = BoardStore::new();
    store
        .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
        .unwrap();
    let before = store.snapshot();
    let ghost = PersonId::new();

    assert_eq!(
        store.update_person(ghost, "x", None),
        Err(BoardError::PersonNotFound(ghost))
    );
    assert!(store.move_person_to_step(ghost, StepId::Sealing).is_err());
    assert!(store.archive_person(ghost).is_err());
    assert!(store.restore_person(ghost).is_err());
    assert!(store.purge_person(ghost).is_err());

    assert_eq!(store.version(), before.version());
    assert_eq!(store.people(), before.people());
}

#[test]
fn move_person_changes_active_step_view() {
    let mut store = BoardStore::new();
    let id = store
        .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
        .unwrap();
    store.move_person_to_step(id, StepId::Sealing).unwrap();

    let snapshot = store.snapshot();
    assert!(active_people_at_step(&snapshot, StepId::Endowment).is_empty());
    assert_eq!(active_people_at_step(&snapshot, StepId::Sealing)[0].id, id);
}

#[test]
fn archive_then_restore_returns_previous_status() {
    for status in MemberStatus::ALL {
        let mut store = BoardStore::new();
        let id = store.add_person("Ana", status, None, StepId::Endowment).unwrap();

        assert!(store.archive_person(id).unwrap());
        let archived = store.person(id).unwrap();
        assert_eq!(archived.status(), PersonStatus::Archived);
        assert_eq!(archived.previous_status(), Some(status));

        assert!(store.restore_person(id).unwrap());
        let restored = store.person(id).unwrap();
        assert_eq!(restored.status(), PersonStatus::from(status));
        assert_eq!(restored.previous_status(), None);
    }
}

#[test]
fn archiving_twice_matches_archiving_once() {
    let mut store = BoardStore::new();
    let id = store
        .add_person("Jorge", MemberStatus::ActiveMember, None, StepId::Sacrament)
        .unwrap();

    store.archive_person(id).unwrap();
    let once = store.snapshot();
    assert!(!store.archive_person(id).unwrap());
    let twice = store.snapshot();

    assert_eq!(once.people(), twice.people());
    assert_eq!(once.version(), twice.version());
    assert_eq!(
        store.person(id).unwrap().previous_status(),
        Some(MemberStatus::ActiveMember)
    );
}

#[test]
fn restore_without_recorded_status_falls_back_to_less_active() {
    let json = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Familia Ramírez",
        "status": "archived",
        "previous_status": null,
        "current_step": "baptism",
        "phone": null
    });
    let person: council_core::Person = serde_json::from_value(json).unwrap();
    let mut restored = person.clone();

    assert!(restored.restore());
    assert_eq!(restored.status(), PersonStatus::LessActive);
    assert_eq!(restored.previous_status(), None);
}

#[test]
fn restoring_an_active_person_changes_nothing() {
    let mut store = BoardStore::new();
    let id = store
        .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
        .unwrap();
    let version = store.version();

    assert!(!store.restore_person(id).unwrap());
    assert_eq!(store.version(), version);
    assert_eq!(store.person(id).unwrap().status(), PersonStatus::NewConvert);
}

#[test]
fn archived_people_view_lists_only_archived() {
    let mut store = BoardStore::new();
    let kept = store
        .add_person("Ana", MemberStatus::NewConvert, None, StepId::Endowment)
        .unwrap();
    let gone = store
        .add_person("Jorge", MemberStatus::LessActive, None, StepId::Endowment)
        .unwrap();
    store.archive_person(gone).unwrap();

    let snapshot = store.snapshot();
    let archived: Vec<PersonId> = archived_people(&snapshot).iter().map(|p| p.id).collect();
    assert_eq!(archived, vec![gone]);
    let active: Vec<PersonId> = active_people_at_step(&snapshot, StepId::Endowment)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(active, vec![kept]);
}
