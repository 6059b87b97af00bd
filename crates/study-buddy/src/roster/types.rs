/// Types for students, weekly availability and study sessions
use super::error::SlotError;
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Both parts must be exactly two ASCII digits; range checks happen afterwards.
static CLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").unwrap());

/// Day of the week a recurring slot falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = SlotError;

    /// Accepts only the exact three-letter tokens; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| SlotError::InvalidDay {
                input: s.to_string(),
            })
    }
}

/// Wall-clock time of day with minute resolution (00:00 to 23:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Builds a clock time, returning `None` outside 0..=23 / 0..=59.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotError::InvalidTime {
            input: s.to_string(),
        };

        let caps = CLOCK_REGEX.captures(s).ok_or_else(invalid)?;
        let hour = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let minute = caps[2].parse::<u32>().map_err(|_| invalid())?;

        ClockTime::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// A weekly recurring interval, e.g. every Monday 09:00-11:00.
///
/// The interval is half-open: a slot ending at 10:00 does not overlap one
/// starting at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    day: Day,
    start: ClockTime,
    end: ClockTime,
}

impl TimeSlot {
    /// Creates a slot without checking `start < end`; that is the caller's job.
    pub fn new(day: Day, start: ClockTime, end: ClockTime) -> Self {
        Self { day, start, end }
    }

    /// Creates a slot, rejecting an end that is not after the start.
    pub fn new_checked(day: Day, start: ClockTime, end: ClockTime) -> Result<Self, SlotError> {
        if end <= start {
            return Err(SlotError::EndNotAfterStart {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self::new(day, start, end))
    }

    /// Parses the three textual fields of a slot and validates the ordering.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self, SlotError> {
        Self::new_checked(day.parse()?, start.parse()?, end.parse()?)
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Returns true if both slots fall on the same day and their intervals
    /// intersect.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        if self.day != other.day {
            return false;
        }
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

/// Stable handle to a student owned by a [`Roster`](super::Roster).
///
/// Students are never removed, so a handle stays valid for the lifetime of
/// the roster that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentKey(pub(crate) usize);

impl StudentKey {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i64,
    name: String,
    courses: Vec<String>,
    availability: Vec<TimeSlot>,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
            availability: Vec::new(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn availability(&self) -> &[TimeSlot] {
        &self.availability
    }

    /// Appends a course. Duplicates are kept as-is.
    pub fn add_course(&mut self, course: impl Into<String>) {
        self.courses.push(course.into());
    }

    pub fn add_availability(&mut self, slot: TimeSlot) {
        self.availability.push(slot);
    }

    /// Removes the slot at a 0-based index.
    ///
    /// An index outside `0..len` is a silent no-op: nothing is mutated and
    /// `None` is returned. Front ends bounds-check and report their own
    /// message before calling this.
    pub fn remove_availability(&mut self, index: usize) -> Option<TimeSlot> {
        if index < self.availability.len() {
            Some(self.availability.remove(index))
        } else {
            None
        }
    }

    pub fn takes_course(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    /// Returns true if any slot of this student overlaps `slot`.
    pub fn is_available_during(&self, slot: &TimeSlot) -> bool {
        self.availability.iter().any(|own| own.overlaps(slot))
    }

    /// Read-only snapshot for display, availability numbered from 1.
    pub fn profile(&self) -> StudentProfile {
        StudentProfile {
            id: self.id,
            name: self.name.clone(),
            courses: self.courses.clone(),
            availability: self
                .availability
                .iter()
                .enumerate()
                .map(|(i, slot)| AvailabilityEntry {
                    position: i + 1,
                    slot: *slot,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub name: String,
    pub courses: Vec<String>,
    pub availability: Vec<AvailabilityEntry>,
}

/// One availability slot together with its 1-based display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub position: usize,
    #[serde(flatten)]
    pub slot: TimeSlot,
}

/// A booked pairing of two students to one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    participants: [StudentKey; 2],
    slot: TimeSlot,
    booked_at: DateTime<Utc>,
}

impl StudySession {
    pub(crate) fn new(first: StudentKey, second: StudentKey, slot: TimeSlot) -> Self {
        Self {
            participants: [first, second],
            slot,
            booked_at: Utc::now(),
        }
    }

    pub fn participants(&self) -> [StudentKey; 2] {
        self.participants
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }
}

/// Participant as shown in a session listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
}

/// Session snapshot with participants resolved to ids and names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub participants: Vec<Participant>,
    pub slot: TimeSlot,
    pub booked_at: DateTime<Utc>,
}
