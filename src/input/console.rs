use log::debug;
use std::io::{BufRead, Write};

use super::{parse_bounded, FloorInput, InputError};

/**
 * Interactive prompter reading answers line by line.
 *
 * Invalid answers are reported on `writer` and the prompt is repeated until a
 * value inside the bounds is given or the input runs out.
 */
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> ConsoleInput<R, W> {
        ConsoleInput { reader, writer }
    }

    /// Blocks until the user presses enter.
    pub fn wait_for_enter(&mut self, prompt: &str) -> Result<(), InputError> {
        self.read_line(prompt).map(|_| ())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> FloorInput for ConsoleInput<R, W> {
    fn read_bounded(&mut self, prompt: &str, min: u8, max: u8) -> Result<u8, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_bounded(&line, min, max) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_invalid_value() => {
                    debug!("Rejected input: {}", e);
                    writeln!(
                        self.writer,
                        "Invalid value! Please enter a number between {} and {}.",
                        min, max
                    )?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
