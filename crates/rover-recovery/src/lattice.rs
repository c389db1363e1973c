//! Edit-distance alignment of a corrupted trace against the transition graph.

use crate::types::{Alignment, MoveKind};
use rover_core::{Result, RoverError, TransitionGraph, START_ROOM};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

const UNREACHED: u64 = u64::MAX;

/// One lattice cell: cheapest way to stand in a room having consumed a
/// given prefix of the trace, plus the move that achieved it.
#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: u64,
    from: Option<(MoveKind, usize)>,
}

const EMPTY_CELL: Cell = Cell {
    cost: UNREACHED,
    from: None,
};

/// Recover the walk a noisy trace most plausibly reports, given that the
/// rover ended at `exit`.
///
/// The trace is aligned against the room graph with unit-cost edits:
/// deleting a spurious reading, inserting a hop whose reading went
/// missing, or matching a reading to a transition (free when the reading
/// names the room entered, one edit when it was garbled). The returned
/// path lists rooms in travel order; the implicit `START` origin is
/// omitted unless the walk re-enters it.
///
/// When the graph has a `START` room the walk begins there. Otherwise the
/// rover may have begun in any room of the graph, and the path then opens
/// with that starting room. `RoverError::NoAlignment` is returned when no
/// sequence of edits explains the trace ending at `exit`, which covers
/// the case of an `exit` the graph does not know.
pub fn recover_signal(
    observed: &[String],
    graph: &TransitionGraph,
    exit: &str,
) -> Result<Vec<String>> {
    align(observed, graph, exit).map(|alignment| alignment.path)
}

/// Like [`recover_signal`], but returns the full [`Alignment`]: path,
/// edit cost, and the repair moves themselves.
pub fn align(observed: &[String], graph: &TransitionGraph, exit: &str) -> Result<Alignment> {
    let lattice = Lattice::build(observed, graph, exit);
    let alignment = lattice.backtrace(exit)?;
    debug!(
        "aligned {} observations to a {}-room walk at cost {}",
        observed.len(),
        alignment.path.len(),
        alignment.cost
    );
    Ok(alignment)
}

/// Layered DP table over (consumed prefix, room).
///
/// Layer `i` holds the best cost for every room after consuming `i`
/// observations. A layer is derived from its predecessor by the delete
/// and match moves, then closed under inserts with a unit-weight
/// Dijkstra sweep so chains of missed readings settle in cost order
/// regardless of room numbering.
struct Lattice<'a> {
    /// Sorted labels of every room mentioned by the graph, plus the
    /// requested exit if the graph does not know it.
    rooms: Vec<&'a str>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    layers: Vec<Vec<Cell>>,
}

impl<'a> Lattice<'a> {
    fn build(observed: &'a [String], graph: &'a TransitionGraph, exit: &'a str) -> Self {
        let mut rooms: Vec<&str> = graph.rooms().collect();
        for room in graph.rooms() {
            for next in graph.neighbors(room) {
                rooms.push(next.as_str());
            }
        }
        rooms.sort_unstable();
        rooms.dedup();

        // The exit joins the room universe even when the graph does not
        // mention it; no transition can reach it, so the alignment for an
        // unknown exit comes out unreachable rather than panicking.
        let foreign_exit = match rooms.binary_search(&exit) {
            Ok(_) => None,
            Err(pos) => {
                rooms.insert(pos, exit);
                Some(pos)
            }
        };

        let index: HashMap<&str, usize> = rooms.iter().enumerate().map(|(i, r)| (*r, i)).collect();
        let successors: Vec<Vec<usize>> = rooms
            .iter()
            .map(|room| {
                graph
                    .neighbors(room)
                    .iter()
                    .filter_map(|next| index.get(next.as_str()).copied())
                    .collect()
            })
            .collect();
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); rooms.len()];
        for (room, outs) in successors.iter().enumerate() {
            for &next in outs {
                predecessors[next].push(room);
            }
        }

        let start = index
            .get(START_ROOM)
            .copied()
            .filter(|&room| foreign_exit != Some(room));

        let mut first = vec![EMPTY_CELL; rooms.len()];
        match start {
            Some(origin) => first[origin].cost = 0,
            None => {
                // No START room: the rover may have begun anywhere on the map.
                for (room, cell) in first.iter_mut().enumerate() {
                    if foreign_exit != Some(room) {
                        cell.cost = 0;
                    }
                }
            }
        }
        relax_inserts(&mut first, &successors);

        let mut lattice = Self {
            rooms,
            successors,
            predecessors,
            layers: vec![first],
        };
        for token in observed {
            let observed_room = lattice.rooms.binary_search(&token.as_str()).ok();
            lattice.push_layer(observed_room);
        }
        lattice
    }

    /// Derive the next layer from the last: delete and match moves first,
    /// then the insert closure.
    fn push_layer(&mut self, observed_room: Option<usize>) {
        let mut layer = vec![EMPTY_CELL; self.rooms.len()];
        {
            let prev = &self.layers[self.layers.len() - 1];
            for room in 0..self.rooms.len() {
                let delete = prev[room].cost.saturating_add(1);
                if delete < layer[room].cost {
                    layer[room] = Cell {
                        cost: delete,
                        from: Some((MoveKind::Delete, room)),
                    };
                }
                let step: u64 = if observed_room == Some(room) { 0 } else { 1 };
                for &pred in &self.predecessors[room] {
                    let cost = prev[pred].cost.saturating_add(step);
                    if cost < layer[room].cost {
                        layer[room] = Cell {
                            cost,
                            from: Some((MoveKind::Match, pred)),
                        };
                    }
                }
            }
        }
        relax_inserts(&mut layer, &self.successors);
        self.layers.push(layer);
    }

    fn backtrace(&self, exit: &str) -> Result<Alignment> {
        let no_alignment = || RoverError::NoAlignment {
            exit: exit.to_string(),
        };
        let exit_room = self
            .rooms
            .binary_search(&exit)
            .map_err(|_| no_alignment())?;
        let last = self.layers.len() - 1;
        let cost = self.layers[last][exit_room].cost;
        if cost == UNREACHED {
            return Err(no_alignment());
        }

        let mut path = Vec::new();
        let mut moves = Vec::new();
        let mut layer = last;
        let mut room = exit_room;
        if self.emits(layer, room) {
            path.push(self.rooms[room].to_string());
        }
        // Each step moves to a cell of strictly smaller (cost, layer), so
        // the walk always bottoms out at an origin cell.
        while let Some((kind, pred)) = self.layers[layer][room].from {
            moves.push(kind);
            match kind {
                MoveKind::Delete => {
                    layer -= 1;
                }
                MoveKind::Match => {
                    layer -= 1;
                    room = pred;
                    if self.emits(layer, room) {
                        path.push(self.rooms[room].to_string());
                    }
                }
                MoveKind::Insert => {
                    room = pred;
                    if self.emits(layer, room) {
                        path.push(self.rooms[room].to_string());
                    }
                }
            }
        }
        path.reverse();
        moves.reverse();
        Ok(Alignment { path, cost, moves })
    }

    /// Every visited cell's room enters the path except the implicit
    /// origin: a seed cell labeled START never produced a reading.
    fn emits(&self, layer: usize, room: usize) -> bool {
        self.layers[layer][room].from.is_some() || self.rooms[room] != START_ROOM
    }
}

/// Close a layer under insert moves: a unit-weight Dijkstra sweep from
/// every reached room, taking transitions without consuming observations.
/// Settling in `(cost, room index)` order keeps the recorded predecessors
/// independent of graph construction order.
fn relax_inserts(layer: &mut [Cell], successors: &[Vec<usize>]) {
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = layer
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.cost != UNREACHED)
        .map(|(room, cell)| Reverse((cell.cost, room)))
        .collect();
    let mut settled = vec![false; layer.len()];
    while let Some(Reverse((cost, room))) = heap.pop() {
        if settled[room] {
            continue; // stale entry superseded by a cheaper one
        }
        settled[room] = true;
        for &next in &successors[room] {
            let total = cost.saturating_add(1);
            if total < layer[next].cost {
                layer[next].cost = total;
                layer[next].from = Some((MoveKind::Insert, room));
                heap.push(Reverse((total, next)));
            }
        }
    }
}
