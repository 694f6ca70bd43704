/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::OutputMode;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub playback: PlaybackConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Highest floor of the building. Asked for interactively when absent.
    pub n_floors: Option<u8>,
    pub n_elevators: usize,
    pub seed: Option<u64>,
    /// Fixed starting floors, one per elevator. Overrides the random placement.
    pub initial_floors: Option<Vec<u8>>,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            n_floors: None,
            n_elevators: 5,
            seed: None,
            initial_floors: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub output: OutputMode,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
/// Loads the configuration at `path`. A missing file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(config_str) => {
            debug!("Loaded configuration from {}", path.display());
            parse_config(&config_str)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using default configuration", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
