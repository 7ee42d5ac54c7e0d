//! Line-oriented prompting over any reader/writer pair.
//!
//! `prompt_until` is the retry combinator every interactive field goes
//! through: it keeps asking until the validator accepts the line, using the
//! validator's error as the next prompt.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use thiserror::Error;

use roster_core::validate;

use crate::theme::Theme;

/// Errors that end an interactive prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream reached end of file.
    #[error("input closed")]
    Closed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prompting front end over an input and output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, theme: Theme, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            theme,
            clear_screen,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Ask with `prompt` until `validate` accepts the line.
    ///
    /// Each rejection re-prompts with the error text, painted as an error.
    pub fn prompt_until<T, E: Display>(
        &mut self,
        prompt: &str,
        mut validate: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, PromptError> {
        let mut line = self.read_line(prompt)?;
        loop {
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("rejected input {line:?}: {e}");
                    let retry = self.theme.error(&format!("{e}: "));
                    line = self.read_line(&retry)?;
                }
            }
        }
    }

    /// List `options` 1-indexed and return the 0-based index picked.
    ///
    /// Empty input picks `default`.
    pub fn select(&mut self, options: &[String], default: usize) -> Result<usize, PromptError> {
        for (i, option) in options.iter().enumerate() {
            let entry = self.theme.success(&format!("{}. {option}", i + 1));
            self.say(&entry)?;
        }
        let prompt = format!(
            "Choose one of the above options (default: {}): ",
            default + 1
        );
        self.prompt_until(&prompt, |line| {
            validate::selection(line, options.len(), default)
        })
    }

    /// Ask for a non-negative integer; empty input picks `default`.
    pub fn ask_number(&mut self, prompt: &str, default: usize) -> Result<usize, PromptError> {
        let prompt = format!("{prompt} (default: {default}): ");
        self.prompt_until(&prompt, |line| validate::number(line, default))
    }

    /// Ask for a menu number. Out-of-range integers are returned as-is.
    pub fn ask_menu_number(&mut self, prompt: &str, default: i64) -> Result<i64, PromptError> {
        let prompt = format!("{prompt} (default: {default}): ");
        self.prompt_until(&prompt, |line| validate::menu_number(line, default))
    }

    /// Block until the operator presses Enter.
    pub fn pause(&mut self) -> Result<(), PromptError> {
        self.read_line("\nPress enter to continue...")?;
        Ok(())
    }

    /// Clear the terminal and home the cursor, unless clearing is disabled.
    pub fn clear(&mut self) -> Result<(), PromptError> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }
}
