pub mod error;
pub mod graph;
pub mod map;

pub use error::{Result, RoverError};
pub use graph::{Door, NavGraph, TransitionGraph, START_ROOM};
pub use map::{DoorSpec, MapSpec};
