//! Rover Recovery — noise-tolerant reconstruction of room traces.
//!
//! A rover reports the rooms it passes through, but radio noise garbles,
//! drops, and fabricates readings. Given the trace, the room transition
//! graph, and the exit the rover was recovered at, [`recover_signal`]
//! reconstructs the walk that explains the trace with the fewest edits.

pub mod lattice;
pub mod types;

pub use lattice::{align, recover_signal};
pub use types::{Alignment, MoveKind};
