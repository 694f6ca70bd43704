use std::str::FromStr;

use crate::shared::Snapshot;

/// Navigation request from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => Ok(Command::Next),
            "p" | "prev" | "previous" => Ok(Command::Previous),
            "f" | "first" => Ok(Command::First),
            "l" | "last" => Ok(Command::Last),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

/**
 * Read-only cursor over a snapshot history.
 *
 * The cursor never moves outside the history. Stepping back from the first
 * snapshot or forward from the last one leaves it where it is.
 */
pub struct Playback<'a> {
    positions: &'a [Snapshot],
    index: usize,
}

impl<'a> Playback<'a> {
    pub fn new(positions: &'a [Snapshot]) -> Playback<'a> {
        Playback {
            positions,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a Snapshot> {
        self.positions.get(self.index)
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.positions.len()
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns true if the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.index += 1;
            return true;
        }
        false
    }

    /// Returns true if the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.can_previous() {
            self.index -= 1;
            return true;
        }
        false
    }

    /// Applies a navigation command. Returns true if the cursor moved.
    pub fn apply(&mut self, command: Command) -> bool {
        let before = self.index;
        match command {
            Command::Next => {
                self.next();
            }
            Command::Previous => {
                self.previous();
            }
            Command::First => self.index = 0,
            Command::Last => self.index = self.positions.len().saturating_sub(1),
            Command::Quit => {}
        }
        self.index != before
    }

    pub fn label(&self) -> String {
        if self.index == 0 {
            "Initial Elevator Positions".to_string()
        } else {
            format!("Position {} of {}", self.index + 1, self.positions.len())
        }
    }
}
