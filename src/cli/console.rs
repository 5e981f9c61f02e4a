use crate::errors::AppError;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-based prompt I/O over any reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `message` without a newline and reads one line back.
    ///
    /// Returns `None` once the input is exhausted. Only the line terminator
    /// is stripped; all other whitespace is kept.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        strip_line_ending(&mut input);
        Ok(Some(input))
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), AppError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

pub fn strip_line_ending(input: &mut String) {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
}
