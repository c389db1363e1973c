//! Multi-source shortest paths from every room to its nearest exit.

use crate::types::{ExitMap, NearestExit};
use rover_core::NavGraph;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, trace};

/// For every room, the nearest exit by weighted distance.
///
/// One Dijkstra sweep seeded at every exit at distance zero; each
/// relaxation carries the owning exit alongside the distance, so by the
/// time a room settles it already knows which exit claimed it. The result
/// has one entry per room the graph mentions (sources and door targets
/// alike), `None` where no exit can reach the room.
///
/// Exit labels not present in the graph are skipped; duplicate exits seed
/// once. Ties resolve deterministically: rooms are indexed in sorted label
/// order, the frontier pops by `(distance, index)`, and only strict
/// improvements overwrite a claim, so equal-cost contention comes out the
/// same way on every run over the same map.
pub fn closest_exits(graph: &NavGraph, exits: &[impl AsRef<str>]) -> ExitMap {
    let mut rooms: Vec<&str> = graph.rooms().collect();
    for room in graph.rooms() {
        for door in graph.doors(room) {
            rooms.push(door.to.as_str());
        }
    }
    rooms.sort_unstable();
    rooms.dedup();
    let index: HashMap<&str, usize> = rooms.iter().enumerate().map(|(i, r)| (*r, i)).collect();

    let mut distance = vec![u64::MAX; rooms.len()];
    let mut owner: Vec<Option<usize>> = vec![None; rooms.len()];
    let mut settled = vec![false; rooms.len()];
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

    for exit in exits {
        if let Some(&seed) = index.get(exit.as_ref()) {
            if distance[seed] != 0 {
                distance[seed] = 0;
                owner[seed] = Some(seed);
                heap.push(Reverse((0, seed)));
            }
        }
    }
    if heap.is_empty() && !rooms.is_empty() {
        trace!("no exit label matched a room; every room is unreachable");
    }

    while let Some(Reverse((dist, room))) = heap.pop() {
        if settled[room] {
            continue; // stale entry superseded by a shorter relaxation
        }
        settled[room] = true;
        for door in graph.doors(rooms[room]) {
            if let Some(&next) = index.get(door.to.as_str()) {
                let total = dist.saturating_add(door.cost);
                if total < distance[next] {
                    distance[next] = total;
                    owner[next] = owner[room];
                    heap.push(Reverse((total, next)));
                }
            }
        }
    }

    let reachable = owner.iter().filter(|o| o.is_some()).count();
    debug!(
        "routed {} of {} rooms toward {} exit labels",
        reachable,
        rooms.len(),
        exits.len()
    );

    rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            let nearest = owner[i].map(|o| NearestExit {
                exit: rooms[o].to_string(),
                distance: distance[i],
            });
            (room.to_string(), nearest)
        })
        .collect()
}
