/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Direction an elevator at `floor` has to travel to reach `target`.
    pub fn towards(floor: u8, target: u8) -> Direction {
        if target > floor {
            Direction::Up
        } else if target < floor {
            Direction::Down
        } else {
            Direction::Stop
        }
    }

    /// Applies one step in this direction to `floor`.
    pub fn step(&self, floor: u8) -> u8 {
        match *self {
            Direction::Up => floor + 1,
            Direction::Down => floor - 1,
            Direction::Stop => floor,
        }
    }
}

/// The floor of every elevator in the fleet at one instant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub floors: Vec<u8>,
}

impl Snapshot {
    pub fn new(floors: &[u8]) -> Snapshot {
        Snapshot {
            floors: floors.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Console,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(OutputMode::Console),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Console => write!(f, "console"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}
