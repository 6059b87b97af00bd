/// Study partner search: shared course plus overlapping weekly availability
use super::{Roster, Student};
use tracing::debug;

impl Roster {
    /// Finds students who take `course` and share at least one overlapping
    /// slot with the student identified by `querying_id`.
    ///
    /// An unknown `querying_id` yields an empty list rather than an error.
    /// Candidates are skipped when their id equals `querying_id`, so a second
    /// student registered under the same id is never returned either.
    /// Results keep roster creation order and list each student once.
    pub fn search_matches(&self, querying_id: i64, course: &str) -> Vec<&Student> {
        let Some(student) = self.find_by_id(querying_id) else {
            debug!("Match search for unknown student {querying_id}");
            return Vec::new();
        };

        let matches: Vec<&Student> = self
            .students
            .iter()
            .filter(|other| other.id() != querying_id)
            .filter(|other| other.takes_course(course))
            .filter(|other| shares_availability(student, other))
            .collect();

        debug!(
            "Match search for student {querying_id} in {course:?} found {} candidate(s)",
            matches.len()
        );

        matches
    }
}

/// Returns true if any slot of `a` overlaps any slot of `b`.
fn shares_availability(a: &Student, b: &Student) -> bool {
    a.availability()
        .iter()
        .any(|mine| b.availability().iter().any(|theirs| mine.overlaps(theirs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::TimeSlot;

    fn slot(day: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(day, start, end).unwrap()
    }

    fn names(matches: &[&Student]) -> Vec<String> {
        matches.iter().map(|s| s.name().to_string()).collect()
    }

    /// Alice(1) and Bob(2) share CS101 on Monday morning.
    fn alice_and_bob() -> Roster {
        let mut roster = Roster::new();
        roster.add_student(1, "Alice");
        roster.add_student(2, "Bob");

        let alice = roster.student_mut(1).unwrap();
        alice.add_course("CS101");
        alice.add_availability(slot("Mon", "09:00", "11:00"));

        let bob = roster.student_mut(2).unwrap();
        bob.add_course("CS101");
        bob.add_availability(slot("Mon", "10:00", "12:00"));

        roster
    }

    #[test]
    fn test_finds_overlapping_classmate() {
        let roster = alice_and_bob();
        assert_eq!(names(&roster.search_matches(1, "CS101")), ["Bob"]);
        assert_eq!(names(&roster.search_matches(2, "CS101")), ["Alice"]);
    }

    #[test]
    fn test_unknown_student_yields_empty() {
        let roster = alice_and_bob();
        assert!(roster.search_matches(42, "CS101").is_empty());
    }

    #[test]
    fn test_course_must_match_exactly() {
        let roster = alice_and_bob();
        assert!(roster.search_matches(1, "cs101").is_empty());
        assert!(roster.search_matches(1, "CS101 ").is_empty());
        assert!(roster.search_matches(1, "MATH20A").is_empty());
    }

    #[test]
    fn test_requires_overlap() {
        let mut roster = alice_and_bob();
        roster.add_student(3, "Cara");
        let cara = roster.student_mut(3).unwrap();
        cara.add_course("CS101");
        // touches Alice's slot but does not overlap it
        cara.add_availability(slot("Mon", "11:00", "12:00"));
        roster.add_student(4, "Dan");
        roster.student_mut(4).unwrap().add_course("CS101");

        assert_eq!(names(&roster.search_matches(1, "CS101")), ["Bob"]);
    }

    #[test]
    fn test_course_is_checked_on_candidate_side_only() {
        let mut roster = alice_and_bob();
        roster.add_student(5, "Eve");
        roster
            .student_mut(5)
            .unwrap()
            .add_availability(slot("Mon", "10:30", "13:00"));

        assert_eq!(names(&roster.search_matches(5, "CS101")), ["Alice", "Bob"]);
    }

    #[test]
    fn test_each_candidate_listed_once_in_creation_order() {
        let mut roster = Roster::new();
        roster.add_student(1, "Alice");
        roster.add_student(3, "Cara");
        roster.add_student(2, "Bob");

        let alice = roster.student_mut(1).unwrap();
        alice.add_availability(slot("Tue", "09:00", "10:00"));
        alice.add_availability(slot("Tue", "09:30", "10:30"));

        for id in [3, 2] {
            let other = roster.student_mut(id).unwrap();
            other.add_course("CS101");
            other.add_course("CS101");
            other.add_availability(slot("Tue", "09:00", "11:00"));
        }

        assert_eq!(names(&roster.search_matches(1, "CS101")), ["Cara", "Bob"]);
    }

    #[test]
    fn test_duplicate_id_is_excluded_with_self() {
        let mut roster = alice_and_bob();
        let twin = roster.add_student(1, "Alice Again");
        let twin = roster.student_at_mut(twin).unwrap();
        twin.add_course("CS101");
        twin.add_availability(slot("Mon", "09:00", "11:00"));

        assert_eq!(names(&roster.search_matches(1, "CS101")), ["Bob"]);
    }
}
