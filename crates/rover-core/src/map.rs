use crate::error::Result;
use crate::graph::{NavGraph, TransitionGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One directed door in a map description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpec {
    pub from: String,
    pub to: String,
    /// Traversal cost; defaults to 1 when the map omits it.
    #[serde(default = "default_cost")]
    pub cost: u64,
}

fn default_cost() -> u64 {
    1
}

/// Declarative description of a floor map, as loaded from JSON.
///
/// `rooms` only needs to list rooms no door mentions (isolated rooms,
/// dead-end exits); rooms appearing in `doors` are materialized on
/// conversion. `exits` names the rooms the routing engine treats as exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSpec {
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub doors: Vec<DoorSpec>,
    #[serde(default)]
    pub exits: Vec<String>,
}

impl MapSpec {
    /// Parse a map description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: MapSpec = serde_json::from_str(json)?;
        debug!(
            "parsed map: {} listed rooms, {} doors, {} exits",
            spec.rooms.len(),
            spec.doors.len(),
            spec.exits.len()
        );
        Ok(spec)
    }

    /// Build the weighted navigation graph for exit routing.
    pub fn nav_graph(&self) -> NavGraph {
        let mut graph = NavGraph::new();
        for room in &self.rooms {
            graph.add_room(room.as_str());
        }
        for door in &self.doors {
            graph.add_door(door.from.as_str(), door.to.as_str(), door.cost);
        }
        graph
    }

    /// Build the unweighted transition graph for signal recovery.
    ///
    /// Door costs are dropped; every transition is one hop.
    pub fn transition_graph(&self) -> TransitionGraph {
        let mut graph = TransitionGraph::new();
        for room in &self.rooms {
            graph.add_room(room.as_str());
        }
        for door in &self.doors {
            graph.add_transition(door.from.as_str(), door.to.as_str());
        }
        graph
    }
}
