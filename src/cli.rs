/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::{Arg, ArgMatches, Command};
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::shared::OutputMode;

/***************************************/
/*       Public data structures        */
/***************************************/
/// Command line options. Every option left out falls back to the
/// configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub config: String,
    pub floors: Option<u8>,
    pub elevators: Option<usize>,
    pub seed: Option<u64>,
    pub calls: Option<String>,
    pub output: Option<OutputMode>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid value '{value}' for --{name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn command() -> Command<'static> {
    Command::new("elevator-playback")
        .about("Dispatches floor calls to the nearest elevator and replays the fleet step by step")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Highest floor of the building (floors are 0 to n)"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .help("Number of elevators in the fleet"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for the initial elevator floors"),
        )
        .arg(
            Arg::new("calls")
                .long("calls")
                .takes_value(true)
                .help("Comma separated call floors, skips the interactive prompts"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .takes_value(true)
                .possible_values(["console", "json"])
                .help("How the recorded positions are presented"),
        )
}

pub fn parse_args<I, T>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(Args {
        config: matches.value_of("config").unwrap_or("config.toml").to_string(),
        floors: parse_value(&matches, "floors")?,
        elevators: parse_value(&matches, "elevators")?,
        seed: parse_value(&matches, "seed")?,
        calls: matches.value_of("calls").map(str::to_string),
        output: parse_value(&matches, "output")?,
    })
}

impl Args {
    /// Overrides the configuration with the options given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(floors) = self.floors {
            config.simulation.n_floors = Some(floors);
        }
        if let Some(elevators) = self.elevators {
            config.simulation.n_elevators = elevators;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(output) = self.output {
            config.playback.output = output;
        }
    }
}

/***************************************/
/*          Private functions          */
/***************************************/
fn parse_value<T>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>, CliError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .value_of(name)
        .map(|value| {
            value.parse::<T>().map_err(|e| CliError::InvalidValue {
                name,
                value: value.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

/***************************************/
/*             Unit tests              */
/***************************************/
