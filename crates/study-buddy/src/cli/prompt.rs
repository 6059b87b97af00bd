//! Line-oriented prompting with re-prompt on invalid input.

use std::io::{self, BufRead, Write};

use crate::roster::{ClockTime, Day, TimeSlot};

/// Reads lines from `input` and writes prompts to `output`.
///
/// End of input surfaces as an [`io::ErrorKind::UnexpectedEof`] error so the
/// menu loop can treat it as a request to exit.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `text` without a trailing newline and flushes.
    pub fn ask(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Reads one line with its line terminator removed and nothing else.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prompts until the line parses as an integer.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            self.ask(prompt)?;
            match self.read_line()?.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    pub fn read_day(&mut self) -> io::Result<Day> {
        loop {
            self.ask("Enter Day (Mon, Tue, Wed, Thu, Fri, Sat, Sun): ")?;
            match self.read_line()?.parse() {
                Ok(day) => return Ok(day),
                Err(_) => self.say("Invalid day. Try again.")?,
            }
        }
    }

    fn read_time(&mut self, prompt: &str, after: Option<ClockTime>) -> io::Result<ClockTime> {
        loop {
            self.ask(prompt)?;
            match self.read_line()?.parse::<ClockTime>() {
                Ok(time) if after.is_some_and(|start| time <= start) => {
                    self.say("End time must be after start time. Try again.")?
                }
                Ok(time) => return Ok(time),
                Err(_) => self.say("Invalid time format. Try again.")?,
            }
        }
    }

    /// Prompts for day, start and end, re-asking each until valid. The
    /// returned slot always has `start < end`.
    pub fn read_slot(&mut self) -> io::Result<TimeSlot> {
        let day = self.read_day()?;
        let start = self.read_time("Enter Start Time (HH:MM): ", None)?;
        let end = self.read_time("Enter End Time (HH:MM): ", Some(start))?;
        Ok(TimeSlot::new(day, start, end))
    }
}
