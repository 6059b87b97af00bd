//! Error types for the roster and its boundary parsers.

use super::types::TimeSlot;
use thiserror::Error;

/// Errors reported by roster operations.
///
/// None of these are raised by panicking; every fallible operation returns one
/// as a value so the caller decides how to report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No student with this id is on the roster
    #[error("Student not found: {id}")]
    StudentNotFound { id: i64 },

    /// A student handle that was not issued by this roster
    #[error("Unknown student handle: {index}")]
    UnknownHandle { index: usize },

    /// At least one of the students has no availability covering the slot
    #[error("Students are not available at this proposed time ({slot})")]
    Infeasible { slot: TimeSlot },
}

impl RosterError {
    /// Returns true if this error means a student could not be resolved.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RosterError::StudentNotFound { .. } | RosterError::UnknownHandle { .. }
        )
    }
}

/// Errors from parsing the textual day/time formats.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid day: {input:?} (expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun)")]
    InvalidDay { input: String },

    #[error("Invalid time format: {input:?} (expected HH:MM)")]
    InvalidTime { input: String },

    #[error("End time {end} must be after start time {start}")]
    EndNotAfterStart { start: String, end: String },
}
