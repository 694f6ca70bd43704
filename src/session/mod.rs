
/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::cli::CliError;
use crate::config::{Config, ConfigError};
use crate::elevator::{CallReport, Dispatcher, EngineError};
use crate::input::{self, ConsoleInput, FloorInput, InputError, ScriptedInput};
use crate::playback::{self, PlaybackError};
use crate::shared::OutputMode;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("the number of floors must be set with --floors or simulation.n_floors when --calls is used")]
    MissingFloors,
}

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Runs one simulation from configuration to a finished snapshot history.
 *
 * With `calls` the calls come from that comma separated list and nothing is
 * written to `console`. Otherwise the session asks on `console` for the number
 * of floors (unless configured), shows the initial positions, waits for enter,
 * then asks how many calls to make and each call floor.
 *
 * In `OutputMode::Json` the history is exported to `out` once every call is
 * handled. `out` is not written to in any other case.
 */
pub fn run_session<R, W, O>(
    config: &Config,
    calls: Option<&str>,
    console: &mut ConsoleInput<R, W>,
    out: O,
) -> Result<Dispatcher, AppError>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let mut scripted = calls.map(ScriptedInput::from_list);

    let n_floors = match config.simulation.n_floors {
        Some(n_floors) => n_floors,
        None if scripted.is_some() => return Err(AppError::MissingFloors),
        None => console.read_bounded(
            "Enter the number of floors in the building (0 to n): ",
            0,
            u8::MAX,
        )?,
    };

    let mut dispatcher = create_dispatcher(config, n_floors)?;

    let calls = match scripted.as_mut() {
        Some(script) => {
            let n_calls = script.remaining();
            input::collect_calls(script, n_calls, n_floors)?
        }
        None => ask_for_calls(console, &dispatcher)?,
    };

    let reports = dispatcher.handle_calls(&calls);
    info!(
        "Simulation finished: {} calls, {} floors travelled, {} recorded positions, final floors {:?}",
        reports.len(),
        floors_travelled(&reports),
        dispatcher.positions().len(),
        dispatcher.elevators()
    );

    if config.playback.output == OutputMode::Json {
        playback::export_json(out, dispatcher.n_floors(), dispatcher.positions())?;
    }

    Ok(dispatcher)
}

pub fn floors_travelled(reports: &[CallReport]) -> usize {
    reports
        .iter()
        .inspect(|report| {
            debug!(
                "Call {} served by elevator {} from floor {} in {} steps",
                report.call, report.elevator, report.from, report.steps
            )
        })
        .map(|report| report.steps)
        .sum()
}

/***************************************/
/*          Private functions          */
/***************************************/
fn create_dispatcher(config: &Config, n_floors: u8) -> Result<Dispatcher, EngineError> {
    if let Some(floors) = &config.simulation.initial_floors {
        if floors.len() != config.simulation.n_elevators {
            warn!(
                "simulation.initial_floors places {} elevators, n_elevators = {} is ignored",
                floors.len(),
                config.simulation.n_elevators
            );
        }
        return Dispatcher::with_floors(n_floors, floors.clone());
    }

    let mut rng = match config.simulation.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    Dispatcher::new(n_floors, config.simulation.n_elevators, &mut rng)
}

fn ask_for_calls<R: BufRead, W: Write>(
    console: &mut ConsoleInput<R, W>,
    dispatcher: &Dispatcher,
) -> Result<Vec<u8>, AppError> {
    if let Some(initial) = dispatcher.positions().first() {
        writeln!(console.writer(), "Initial Elevator Positions")?;
        write!(
            console.writer(),
            "{}",
            playback::render_snapshot(initial, dispatcher.n_floors())
        )?;
    }

    console.wait_for_enter("Press Enter to continue after observing the initial elevator positions...")?;

    let n_calls = console.read_bounded("How many floors do you want to call the lift for? ", 0, u8::MAX)?;
    Ok(input::collect_calls(console, n_calls as usize, dispatcher.n_floors())?)
}
