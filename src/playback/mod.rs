pub mod cursor;
pub mod presenter;
pub mod render;

pub use cursor::{Command, Playback};
pub use presenter::{export_json, spawn_command_reader, ConsolePresenter};
pub use render::render_snapshot;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize positions: {0}")]
    Json(#[from] serde_json::Error),
}
