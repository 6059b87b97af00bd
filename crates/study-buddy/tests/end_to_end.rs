//! Roster scenarios exercised through the public library API only.

use study_buddy::roster::{Roster, RosterError, TimeSlot};

fn slot(day: &str, start: &str, end: &str) -> TimeSlot {
    TimeSlot::parse(day, start, end).unwrap()
}

#[test]
fn test_alice_and_bob_study_together() {
    let mut roster = Roster::new();
    roster.add_student(1, "Alice");
    roster.add_student(2, "Bob");

    let alice = roster.find_by_id_mut(1).unwrap();
    alice.add_course("CS101");
    alice.add_availability(slot("Mon", "09:00", "11:00"));

    let bob = roster.find_by_id_mut(2).unwrap();
    bob.add_course("CS101");
    bob.add_availability(slot("Mon", "10:00", "12:00"));

    let matches: Vec<&str> = roster
        .search_matches(1, "CS101")
        .into_iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(matches, ["Bob"]);

    let alice = roster.key_of(1).unwrap();
    let bob = roster.key_of(2).unwrap();
    roster
        .schedule(alice, bob, slot("Mon", "10:00", "11:00"))
        .unwrap();
    assert_eq!(roster.list_sessions().len(), 1);
}

#[test]
fn test_failed_booking_then_retry_after_update() {
    let mut roster = Roster::new();
    roster.add_student(10, "Kim");
    roster.add_student(11, "Lee");
    roster
        .find_by_id_mut(10)
        .unwrap()
        .add_availability(slot("Sat", "12:00", "14:00"));

    let proposed = slot("Sat", "13:00", "14:00");
    let err = roster.schedule_by_ids(10, 11, proposed).unwrap_err();
    assert!(matches!(err, RosterError::Infeasible { .. }));
    assert!(!err.is_not_found());
    assert!(roster.list_sessions().is_empty());

    roster
        .find_by_id_mut(11)
        .unwrap()
        .add_availability(slot("Sat", "13:30", "15:00"));
    roster.schedule_by_ids(10, 11, proposed).unwrap();

    let sessions = roster.list_sessions();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].slot.to_string(), "Sat 13:00-14:00");
    let ids: Vec<i64> = sessions[0].participants.iter().map(|p| p.id).collect();
    assert_eq!(ids, [10, 11]);
}

#[test]
fn test_removing_last_slot_ends_matches() {
    let mut roster = Roster::new();
    for (id, name) in [(1, "Alice"), (2, "Bob")] {
        roster.add_student(id, name);
        let student = roster.find_by_id_mut(id).unwrap();
        student.add_course("CPSC1010");
        student.add_availability(slot("Thu", "15:00", "16:00"));
    }
    assert_eq!(roster.search_matches(1, "CPSC1010").len(), 1);

    roster.find_by_id_mut(2).unwrap().remove_availability(0);
    assert!(roster.search_matches(1, "CPSC1010").is_empty());
}
