use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label of the implicit origin room used by signal recovery.
pub const START_ROOM: &str = "START";

/// A directed, weighted doorway into an adjacent room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Destination room label.
    pub to: String,
    /// Traversal cost in whatever unit the map uses (steps, seconds).
    pub cost: u64,
}

impl Door {
    pub fn new(to: impl Into<String>, cost: u64) -> Self {
        Self {
            to: to.into(),
            cost,
        }
    }
}

/// Weighted directed graph of rooms, used for exit routing.
///
/// Adding a door materializes both endpoint rooms, so a well-formed graph
/// is closed: every room it mentions has an adjacency entry, and a room
/// with no outgoing doors has an empty one. Graphs deserialized from
/// external data may be sparse; consumers treat missing rooms as having
/// no outgoing doors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavGraph {
    rooms: HashMap<String, Vec<Door>>,
}

impl NavGraph {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Ensure a room exists, with no doors of its own.
    pub fn add_room(&mut self, room: impl Into<String>) {
        self.rooms.entry(room.into()).or_default();
    }

    /// Add a directed door from one room to another.
    pub fn add_door(&mut self, from: impl Into<String>, to: impl Into<String>, cost: u64) {
        let to = to.into();
        self.rooms.entry(to.clone()).or_default();
        self.rooms
            .entry(from.into())
            .or_default()
            .push(Door { to, cost });
    }

    /// Iterate over room labels, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Outgoing doors of a room. Unknown rooms have none.
    pub fn doors(&self, room: &str) -> &[Door] {
        self.rooms.get(room).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, room: &str) -> bool {
        self.rooms.contains_key(room)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn door_count(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Unweighted directed graph of room transitions, used for signal recovery.
///
/// Same closure rule as [`NavGraph`]: adding a transition materializes both
/// rooms. Every hop costs one step, so only connectivity is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionGraph {
    rooms: HashMap<String, Vec<String>>,
}

impl TransitionGraph {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Ensure a room exists, with no transitions of its own.
    pub fn add_room(&mut self, room: impl Into<String>) {
        self.rooms.entry(room.into()).or_default();
    }

    /// Add a directed transition from one room to another.
    pub fn add_transition(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let to = to.into();
        self.rooms.entry(to.clone()).or_default();
        self.rooms.entry(from.into()).or_default().push(to);
    }

    /// Iterate over room labels, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Rooms reachable in one hop. Unknown rooms have none.
    pub fn neighbors(&self, room: &str) -> &[String] {
        self.rooms.get(room).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_transition(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    pub fn contains(&self, room: &str) -> bool {
        self.rooms.contains_key(room)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn transition_count(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
