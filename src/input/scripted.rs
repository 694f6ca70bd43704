use log::debug;
use std::collections::VecDeque;

use super::{parse_bounded, FloorInput, InputError};

/// Pre-supplied answers, consumed in order. A bad value is an error, there is
/// nobody to ask again.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    values: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(values: I) -> ScriptedInput
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma separated list such as `"3, 7,0"`.
    pub fn from_list(list: &str) -> ScriptedInput {
        ScriptedInput::new(
            list.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty()),
        )
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl FloorInput for ScriptedInput {
    fn read_bounded(&mut self, prompt: &str, min: u8, max: u8) -> Result<u8, InputError> {
        let value = self.values.pop_front().ok_or(InputError::EndOfInput)?;
        debug!("{}{}", prompt, value);
        parse_bounded(&value, min, max)
    }
}
