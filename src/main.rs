/* 3rd party libraries */
use crossbeam_channel as cbc;
use std::ffi::OsString;
use std::io::{self, BufReader, Write};

/* Custom libraries */
use cli::CliError;
use input::ConsoleInput;
use playback::{Command, ConsolePresenter};
use session::AppError;
use shared::OutputMode;

/* Modules */
mod cli;
mod config;
mod elevator;
mod input;
mod playback;
mod session;
mod shared;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(std::env::args_os()) {
        Err(AppError::Cli(CliError::Clap(e))) => e.exit(),
        result => unwrap_or_exit!(result),
    }
}

fn run<I: IntoIterator<Item = OsString>>(args: I) -> Result<(), AppError> {
    // Load the configuration, command line options take precedence
    let args = cli::parse_args(args)?;
    let mut config = config::load_config(&args.config)?;
    args.apply(&mut config);

    // Prompts go to stderr when stdout carries the JSON export
    let prompt_writer: Box<dyn Write> = match config.playback.output {
        OutputMode::Json => Box::new(io::stderr()),
        OutputMode::Console => Box::new(io::stdout()),
    };
    let mut console = ConsoleInput::new(io::stdin().lock(), prompt_writer);

    let dispatcher = session::run_session(&config, args.calls.as_deref(), &mut console, io::stdout())?;

    // The playback reader takes over stdin
    drop(console);

    if config.playback.output == OutputMode::Console {
        let (command_tx, command_rx) = cbc::unbounded::<Command>();
        playback::spawn_command_reader(BufReader::new(io::stdin()), command_tx)?;

        let mut presenter = ConsolePresenter::new(io::stdout(), dispatcher.n_floors(), command_rx);
        presenter.run(dispatcher.positions())?;
    }

    Ok(())
}
