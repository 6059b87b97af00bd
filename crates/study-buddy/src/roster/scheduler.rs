/// Study session booking with a joint availability check
use super::{Roster, RosterError, StudentKey, StudySession, TimeSlot};
use tracing::{info, warn};

impl Roster {
    /// Books a session for two students at `slot`.
    ///
    /// The booking is feasible when each student has at least one declared
    /// slot overlapping `slot`; the two slots need not be the same entry or
    /// overlap each other. On success the session is appended and returned.
    /// On failure nothing is recorded.
    pub fn schedule(
        &mut self,
        first: StudentKey,
        second: StudentKey,
        slot: TimeSlot,
    ) -> Result<&StudySession, RosterError> {
        let a = self
            .student(first)
            .ok_or(RosterError::UnknownHandle { index: first.0 })?;
        let b = self
            .student(second)
            .ok_or(RosterError::UnknownHandle { index: second.0 })?;

        if !(a.is_available_during(&slot) && b.is_available_during(&slot)) {
            warn!(
                "Cannot schedule {} and {} at {}: not available",
                a.name(),
                b.name(),
                slot
            );
            return Err(RosterError::Infeasible { slot });
        }

        info!("Scheduled session for {} and {} at {}", a.name(), b.name(), slot);

        self.sessions.push(StudySession::new(first, second, slot));
        Ok(&self.sessions[self.sessions.len() - 1])
    }

    /// Resolves both ids (first match each) and then calls [`Roster::schedule`].
    pub fn schedule_by_ids(
        &mut self,
        first_id: i64,
        second_id: i64,
        slot: TimeSlot,
    ) -> Result<&StudySession, RosterError> {
        let first = self
            .key_of(first_id)
            .ok_or(RosterError::StudentNotFound { id: first_id })?;
        let second = self
            .key_of(second_id)
            .ok_or(RosterError::StudentNotFound { id: second_id })?;

        self.schedule(first, second, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, start: &str, end: &str) -> TimeSlot {
        TimeSlot::parse(day, start, end).unwrap()
    }

    fn roster_with(slots_a: &[TimeSlot], slots_b: &[TimeSlot]) -> (Roster, StudentKey, StudentKey) {
        let mut roster = Roster::new();
        let a = roster.add_student(1, "Alice");
        let b = roster.add_student(2, "Bob");
        for s in slots_a {
            roster.student_mut(1).unwrap().add_availability(*s);
        }
        for s in slots_b {
            roster.student_mut(2).unwrap().add_availability(*s);
        }
        (roster, a, b)
    }

    #[test]
    fn test_schedule_when_both_available() {
        let (mut roster, a, b) = roster_with(
            &[slot("Mon", "09:00", "11:00")],
            &[slot("Mon", "10:00", "12:00")],
        );

        let proposed = slot("Mon", "10:00", "11:00");
        let session = roster.schedule(a, b, proposed).unwrap();
        assert_eq!(session.participants(), [a, b]);
        assert_eq!(*session.slot(), proposed);

        let sessions = roster.list_sessions();
        assert_eq!(sessions.len(), 1);
        let names: Vec<_> = sessions[0].participants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(sessions[0].slot, proposed);
    }

    #[test]
    fn test_each_student_needs_own_overlap() {
        // the students' slots never overlap each other, but both touch the proposal
        let (mut roster, a, b) = roster_with(
            &[slot("Thu", "08:00", "10:30")],
            &[slot("Thu", "10:45", "12:00")],
        );

        assert!(roster.schedule(a, b, slot("Thu", "10:00", "11:00")).is_ok());
        assert_eq!(roster.sessions().len(), 1);
    }

    #[test]
    fn test_infeasible_leaves_sessions_unchanged() {
        let (mut roster, a, b) = roster_with(
            &[slot("Mon", "09:00", "11:00")],
            &[slot("Tue", "09:00", "11:00")],
        );

        let proposed = slot("Mon", "09:00", "10:00");
        assert_eq!(
            roster.schedule(a, b, proposed).unwrap_err(),
            RosterError::Infeasible { slot: proposed }
        );
        assert!(roster.sessions().is_empty());
    }

    #[test]
    fn test_no_availability_is_infeasible() {
        let (mut roster, a, b) = roster_with(&[slot("Mon", "09:00", "11:00")], &[]);
        assert!(roster.schedule(a, b, slot("Mon", "09:00", "10:00")).is_err());
        assert!(roster.schedule(b, a, slot("Mon", "09:00", "10:00")).is_err());
        assert!(roster.sessions().is_empty());
    }

    #[test]
    fn test_touching_proposal_is_infeasible() {
        let (mut roster, a, b) = roster_with(
            &[slot("Fri", "09:00", "10:00")],
            &[slot("Fri", "09:00", "10:00")],
        );
        assert!(roster.schedule(a, b, slot("Fri", "10:00", "11:00")).is_err());
    }

    #[test]
    fn test_schedule_by_ids_reports_missing_student() {
        let (mut roster, _, _) = roster_with(
            &[slot("Mon", "09:00", "11:00")],
            &[slot("Mon", "09:00", "11:00")],
        );

        let proposed = slot("Mon", "09:00", "10:00");
        let err = roster.schedule_by_ids(1, 3, proposed).unwrap_err();
        assert_eq!(err, RosterError::StudentNotFound { id: 3 });
        assert!(err.is_not_found());

        assert!(roster.schedule_by_ids(2, 1, proposed).is_ok());
        assert_eq!(roster.list_sessions()[0].participants[0].name, "Bob");
    }

    #[test]
    fn test_foreign_handle_is_rejected() {
        let (mut roster, a, _) = roster_with(&[], &[]);
        let err = roster
            .schedule(a, StudentKey(99), slot("Mon", "09:00", "10:00"))
            .unwrap_err();
        assert_eq!(err, RosterError::UnknownHandle { index: 99 });
    }
}
