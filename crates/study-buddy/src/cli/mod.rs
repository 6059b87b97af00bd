//! Interactive text menu driving a [`Roster`].
//!
//! The menu does all input validation itself (day tokens, `HH:MM` times,
//! end after start, availability positions) before calling into the roster,
//! which accepts already-validated values.

mod prompt;

pub use prompt::Prompter;

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::roster::{Roster, RosterError, StudySession, TimeSlot};

const MENU: &str = "\n--- Study Buddy Menu ---\n\
1. Add Student\n\
2. Add Course\n\
3. Add Availability\n\
4. Remove Availability\n\
5. View Profile\n\
6. Search Matches\n\
7. Schedule Session\n\
8. View All Sessions\n\
0. Exit";

/// Runs the menu until the user picks `0` or input ends.
pub fn run_menu<R: BufRead, W: Write>(roster: &mut Roster, input: R, output: W) -> io::Result<()> {
    let mut menu = Menu {
        roster,
        prompt: Prompter::new(input, output),
    };

    match menu.run() {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("Input ended; leaving menu");
            menu.prompt.say("")?;
            menu.prompt.say("Exiting Study Buddy. Goodbye!")
        }
        other => other,
    }
}

struct Menu<'a, R, W> {
    roster: &'a mut Roster,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let choice = self.prompt.read_int("Choose an option: ")?;
            debug!("Menu choice {choice}");

            match choice {
                0 => break,
                1 => self.add_student()?,
                2 => self.add_course()?,
                3 => self.add_availability()?,
                4 => self.remove_availability()?,
                5 => self.view_profile()?,
                6 => self.search_matches()?,
                7 => self.schedule_session()?,
                8 => self.view_sessions()?,
                // Unknown numbers fall through to the menu again.
                _ => {}
            }
        }

        self.prompt.say("Exiting Study Buddy. Goodbye!")
    }

    fn add_student(&mut self) -> io::Result<()> {
        let id = self.prompt.read_int("Enter Student ID: ")?;
        self.prompt.ask("Enter Student Name: ")?;
        let name = self.prompt.read_line()?;
        self.roster.add_student(id, name);
        self.prompt.say("Student added successfully.")
    }

    /// Asks for an id and reports "Student not found." when it is unknown.
    fn ask_existing_student(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        let id = self.prompt.read_int(prompt)?;
        if self.roster.find_by_id(id).is_some() {
            Ok(Some(id))
        } else {
            self.prompt.say("Student not found.")?;
            Ok(None)
        }
    }

    fn add_course(&mut self) -> io::Result<()> {
        let Some(id) = self.ask_existing_student("Enter Student ID: ")? else {
            return Ok(());
        };
        self.prompt.ask("Enter Course: ")?;
        let course = self.prompt.read_line()?;
        if let Some(student) = self.roster.find_by_id_mut(id) {
            student.add_course(course);
        }
        self.prompt.say("Course added successfully.")
    }

    fn add_availability(&mut self) -> io::Result<()> {
        let Some(id) = self.ask_existing_student("Enter Student ID: ")? else {
            return Ok(());
        };
        let slot = self.prompt.read_slot()?;
        if let Some(student) = self.roster.find_by_id_mut(id) {
            student.add_availability(slot);
        }
        self.prompt.say("Availability added successfully.")
    }

    fn remove_availability(&mut self) -> io::Result<()> {
        let Some(id) = self.ask_existing_student("Enter Student ID: ")? else {
            return Ok(());
        };
        let slots: Vec<TimeSlot> = self
            .roster
            .find_by_id(id)
            .map(|s| s.availability().to_vec())
            .unwrap_or_default();

        if slots.is_empty() {
            return self.prompt.say("No availability to remove.");
        }

        self.prompt.say("Current Availability:")?;
        for (i, slot) in slots.iter().enumerate() {
            writeln!(self.prompt.output(), "{}. {}", i + 1, slot)?;
        }

        // the roster ignores out-of-range indices, so bounds are enforced here
        let position = loop {
            let n = self
                .prompt
                .read_int("Enter the number of the availability to remove: ")?;
            match usize::try_from(n) {
                Ok(n) if (1..=slots.len()).contains(&n) => break n,
                _ => self.prompt.say("Invalid number. Try again.")?,
            }
        };

        if let Some(student) = self.roster.find_by_id_mut(id) {
            student.remove_availability(position - 1);
        }
        self.prompt.say("Availability removed successfully.")
    }

    fn view_profile(&mut self) -> io::Result<()> {
        let id = self.prompt.read_int("Enter Student ID: ")?;
        let Some(profile) = self.roster.find_by_id(id).map(|s| s.profile()) else {
            return self.prompt.say("Student not found.");
        };

        let out = self.prompt.output();
        writeln!(out, "\nStudent ID: {}, Name: {}", profile.id, profile.name)?;
        write!(out, "Courses: ")?;
        for course in &profile.courses {
            write!(out, "{course} ")?;
        }
        writeln!(out, "\nAvailability:")?;
        for entry in &profile.availability {
            writeln!(out, "{}. {}", entry.position, entry.slot)?;
        }
        Ok(())
    }

    fn search_matches(&mut self) -> io::Result<()> {
        let Some(id) = self.ask_existing_student("Enter Your Student ID: ")? else {
            return Ok(());
        };
        self.prompt.ask("Enter Course to Search: ")?;
        let course = self.prompt.read_line()?;

        let names: Vec<String> = self
            .roster
            .search_matches(id, &course)
            .iter()
            .map(|s| s.name().to_string())
            .collect();

        if names.is_empty() {
            return self.prompt.say("No matches found.");
        }
        self.prompt.say("\nMatches Found:")?;
        for name in names {
            self.prompt.say(&name)?;
        }
        Ok(())
    }

    fn schedule_session(&mut self) -> io::Result<()> {
        let first = self.prompt.read_int("Enter Student1 ID: ")?;
        let second = self.prompt.read_int("Enter Student2 ID: ")?;
        let (Some(first), Some(second)) = (self.roster.key_of(first), self.roster.key_of(second))
        else {
            return self.prompt.say("One or both students not found.");
        };

        let slot = self.prompt.read_slot()?;
        match self.roster.schedule(first, second, slot) {
            Ok(_) => self.prompt.say("Session scheduled successfully!"),
            Err(RosterError::Infeasible { .. }) => self
                .prompt
                .say("Error: Students are not available at this time."),
            Err(e) => self.prompt.say(&format!("Error: {e}")),
        }
    }

    fn view_sessions(&mut self) -> io::Result<()> {
        if self.roster.sessions().is_empty() {
            return self.prompt.say("No scheduled sessions.");
        }

        self.prompt.say("\nAll Scheduled Study Sessions:")?;
        let lines: Vec<String> = self
            .roster
            .sessions()
            .iter()
            .map(|session| self.describe(session))
            .collect();
        for line in lines {
            self.prompt.say(&line)?;
        }
        Ok(())
    }

    fn describe(&self, session: &StudySession) -> String {
        let summary = self.roster.summarize(session);
        let names: Vec<&str> = summary
            .participants
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        format!("Study Session at {} with: {}", summary.slot, names.join(" "))
    }
}
