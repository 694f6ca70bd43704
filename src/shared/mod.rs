pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::OutputMode;
pub use structs::Snapshot;
