pub mod console;
pub mod scripted;

pub use console::ConsoleInput;
pub use scripted::ScriptedInput;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("'{0}' is not a whole number")]
    Parse(String),
    #[error("{value} is outside the allowed range {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },
    #[error("input ended before all values were read")]
    EndOfInput,
}

impl InputError {
    /// True for errors caused by a bad value rather than by the input source.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, InputError::Parse(_) | InputError::OutOfRange { .. })
    }
}

/**
 * A source of bounded integers.
 *
 * Implementations either keep asking until a value in `min..=max` is supplied,
 * or fail with a descriptive `InputError`.
 */
pub trait FloorInput {
    fn read_bounded(&mut self, prompt: &str, min: u8, max: u8) -> Result<u8, InputError>;
}

/***************************************/
/*             Public API              */
/***************************************/
/// Reads `n_calls` call floors, each in `0..=n_floors`.
pub fn collect_calls<I: FloorInput + ?Sized>(
    input: &mut I,
    n_calls: usize,
    n_floors: u8,
) -> Result<Vec<u8>, InputError> {
    (1..=n_calls)
        .map(|i| input.read_bounded(&format!("Enter the floor number for call {}: ", i), 0, n_floors))
        .collect()
}

pub fn parse_bounded(text: &str, min: u8, max: u8) -> Result<u8, InputError> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| InputError::Parse(text.trim().to_string()))?;

    if value < min as i64 || value > max as i64 {
        return Err(InputError::OutOfRange { value, min, max });
    }

    Ok(value as u8)
}
