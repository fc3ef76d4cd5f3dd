//! # Console I/O
//!
//! Line-oriented prompts over any `BufRead` / `Write` pair. The binary wires
//! this to stdin/stdout; tests wire it to byte buffers.
//!
//! ## Prompt Behavior
//! ```text
//! prompt_choice("Please choose a number:")
//!   "abc" ──► "Error with your choice! Try again!" ──► ask again
//!   "7"   ──► Ok(7)   (range is the caller's business)
//!
//! prompt_number("What amount do you want", 1..=5)
//!   "9"   ──► "Error: You entered an invalid number. ..." ──► ask again
//!   "3"   ──► Ok(3)
//!
//! prompt_optional_number("Which product # do you want", 1..=3)
//!   ""    ──► Ok(None)
//!
//! EOF anywhere ──► Err(InputClosed)
//! ```

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::error::{ConsoleError, ConsoleResult};

/// A prompt-and-read console.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn print(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: impl Display) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a menu number. Re-asks on anything that is not an integer.
    pub fn prompt_choice(&mut self, prompt: &str) -> ConsoleResult<i64> {
        loop {
            let line = self.ask(format_args!("{prompt} "))?;
            match line.trim().parse() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.print("Error with your choice! Try again!")?,
            }
        }
    }

    /// Reads an integer within `range`, re-asking until one is given.
    pub fn prompt_number(&mut self, prompt: &str, range: RangeInclusive<i64>) -> ConsoleResult<i64> {
        loop {
            let line = self.ask_in_range(prompt, &range)?;
            if let Some(number) = self.parse_in_range(&line, &range)? {
                return Ok(number);
            }
        }
    }

    /// Like [`Console::prompt_number`], but an empty line yields `None`.
    pub fn prompt_optional_number(
        &mut self,
        prompt: &str,
        range: RangeInclusive<i64>,
    ) -> ConsoleResult<Option<i64>> {
        loop {
            let line = self.ask_in_range(prompt, &range)?;
            if line.trim().is_empty() {
                return Ok(None);
            }
            if let Some(number) = self.parse_in_range(&line, &range)? {
                return Ok(Some(number));
            }
        }
    }

    fn ask_in_range(&mut self, prompt: &str, range: &RangeInclusive<i64>) -> ConsoleResult<String> {
        self.ask(format_args!(
            "{prompt} ({}-{}): ",
            range.start(),
            range.end()
        ))
    }

    /// Parses `line`; prints the range error and returns `None` when it is
    /// not an integer inside `range`.
    fn parse_in_range(
        &mut self,
        line: &str,
        range: &RangeInclusive<i64>,
    ) -> ConsoleResult<Option<i64>> {
        match line.trim().parse::<i64>() {
            Ok(number) if range.contains(&number) => Ok(Some(number)),
            _ => {
                self.print(format_args!(
                    "Error: You entered an invalid number. Please only use numbers between {} and {}.\n",
                    range.start(),
                    range.end()
                ))?;
                Ok(None)
            }
        }
    }
}
