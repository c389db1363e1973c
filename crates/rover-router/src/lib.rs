//! Rover Router — nearest-exit routing over weighted floor maps.

pub mod closest;
pub mod types;

pub use closest::closest_exits;
pub use types::{ExitMap, NearestExit};
