//! In-memory roster of students and the study sessions booked between them.
//!
//! The roster is the single owner of all state. Match search lives in
//! `matching` and session booking in `scheduler`; both are methods on
//! [`Roster`] so callers only ever hold one value.

mod error;
mod matching;
mod scheduler;
mod types;

pub use error::{RosterError, SlotError};
pub use types::*;

use tracing::{debug, info};

/// Owns every student and every booked session for the life of the process.
///
/// Both sequences are append-only. Student ids are supplied by the caller and
/// are not required to be unique; id lookups return the first match in
/// creation order.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    sessions: Vec<StudySession>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student and returns its handle. Always succeeds.
    pub fn add_student(&mut self, id: i64, name: impl Into<String>) -> StudentKey {
        let student = Student::new(id, name);
        info!("Adding student {} ({})", student.id(), student.name());

        if self.key_of(id).is_some() {
            debug!("Student id {id} is already in use; lookups will return the earlier entry");
        }

        self.students.push(student);
        StudentKey(self.students.len() - 1)
    }

    /// Finds the first student with this id.
    pub fn find_by_id(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    /// Like [`Roster::find_by_id_mut`], but reports an unknown id as an error.
    pub fn student_mut(&mut self, id: i64) -> Result<&mut Student, RosterError> {
        self.find_by_id_mut(id)
            .ok_or(RosterError::StudentNotFound { id })
    }

    /// Handle of the first student with this id.
    pub fn key_of(&self, id: i64) -> Option<StudentKey> {
        self.students
            .iter()
            .position(|s| s.id() == id)
            .map(StudentKey)
    }

    pub fn student(&self, key: StudentKey) -> Option<&Student> {
        self.students.get(key.0)
    }

    /// Mutable access by handle; reaches students that share an id with an
    /// earlier entry.
    #[cfg(test)]
    pub(crate) fn student_at_mut(&mut self, key: StudentKey) -> Option<&mut Student> {
        self.students.get_mut(key.0)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// Snapshots of all sessions in booking order.
    pub fn list_sessions(&self) -> Vec<SessionSummary> {
        self.sessions
            .iter()
            .map(|session| self.summarize(session))
            .collect()
    }

    /// Resolves a session's participant handles to ids and names.
    pub fn summarize(&self, session: &StudySession) -> SessionSummary {
        SessionSummary {
            participants: session
                .participants()
                .iter()
                .filter_map(|key| self.student(*key))
                .map(|s| Participant {
                    id: s.id(),
                    name: s.name().to_string(),
                })
                .collect(),
            slot: *session.slot(),
            booked_at: session.booked_at(),
        }
    }
}
