/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use super::{render_snapshot, Command, Playback, PlaybackError};
use crate::shared::Snapshot;

/**
 * Steps through a finished simulation on a terminal.
 *
 * The presenter only reads the snapshot history. Navigation commands arrive on
 * `command_rx`, usually fed by `spawn_command_reader`. Playback ends on
 * `Command::Quit` or when every sender is dropped.
 *
 * # Fields
 * - `writer`:      Where the building is drawn.
 * - `n_floors`:    Highest floor, used to draw the shaft.
 * - `command_rx`:  Receives navigation commands.
 */
pub struct ConsolePresenter<W> {
    writer: W,
    n_floors: u8,
    command_rx: cbc::Receiver<Command>,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(writer: W, n_floors: u8, command_rx: cbc::Receiver<Command>) -> ConsolePresenter<W> {
        ConsolePresenter {
            writer,
            n_floors,
            command_rx,
        }
    }

    pub fn run(&mut self, positions: &[Snapshot]) -> Result<(), PlaybackError> {
        let mut playback = Playback::new(positions);
        self.draw(&playback)?;

        loop {
            match self.command_rx.recv() {
                Ok(Command::Quit) | Err(_) => break,
                Ok(command) => {
                    if playback.apply(command) {
                        debug!("{:?} -> snapshot {}", command, playback.index());
                        self.draw(&playback)?;
                    } else {
                        writeln!(self.writer, "No more positions in that direction.")?;
                        self.write_controls(&playback)?;
                    }
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw(&mut self, playback: &Playback) -> Result<(), PlaybackError> {
        writeln!(self.writer, "{}", playback.label())?;
        if let Some(snapshot) = playback.current() {
            write!(self.writer, "{}", render_snapshot(snapshot, self.n_floors))?;
        }
        self.write_controls(playback)
    }

    fn write_controls(&mut self, playback: &Playback) -> Result<(), PlaybackError> {
        let previous = if playback.can_previous() { "[p]revious" } else { " previous " };
        let next = if playback.can_next() { "[n]ext" } else { " next " };
        writeln!(self.writer, "{}  {}  [f]irst  [l]ast  [q]uit", previous, next)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Forwards parsed commands from `reader` to `command_tx` on a separate
/// thread. The thread stops after `Command::Quit`, at end of input, or once
/// the receiver is gone.
pub fn spawn_command_reader<R>(reader: R, command_tx: cbc::Sender<Command>) -> std::io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    Builder::new()
        .name("playback_input".into())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Error reading playback input: {}", e);
                        break;
                    }
                };

                match line.parse::<Command>() {
                    Ok(command) => {
                        if command_tx.send(command).is_err() || command == Command::Quit {
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
        })
}

#[derive(Serialize)]
struct PositionsExport<'a> {
    n_floors: u8,
    positions: &'a [Snapshot],
}

/// Writes the snapshot history as a JSON document for external viewers.
pub fn export_json<W: Write>(mut writer: W, n_floors: u8, positions: &[Snapshot]) -> Result<(), PlaybackError> {
    let export = PositionsExport { n_floors, positions };
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
