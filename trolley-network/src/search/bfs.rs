//! Breadth-first search.
//!
//! Explores the network one hop at a time, so the first path to reach the
//! end station has the fewest routes. When several paths tie on hop count,
//! the one discovered first in adjacency order wins.

use std::collections::VecDeque;

use tracing::trace;

use super::Budget;
use super::path::{Path, reconstruct};
use crate::domain::StationId;
use crate::network::TrolleyGraph;

/// Find a fewest-hops path from `start` to `end`.
///
/// Each station is enqueued at most once, and its parent is the station
/// that discovered it first. O(V + E).
pub(super) fn find<D>(
    graph: &TrolleyGraph<D>,
    start: StationId,
    end: StationId,
    budget: &mut Budget,
) -> Option<Path> {
    let stations = graph.station_count();
    let mut discovered = vec![false; stations];
    let mut parents: Vec<Option<StationId>> = vec![None; stations];
    let mut frontier = VecDeque::from([start]);
    discovered[start.index()] = true;

    while let Some(current) = frontier.pop_front() {
        if !budget.spend() {
            return None;
        }

        trace!(
            station = graph.name_of(current),
            frontier = frontier.len(),
            "BFS exploring station"
        );

        if current == end {
            return reconstruct(graph, &parents, start, end);
        }

        for next in graph.neighbours(current) {
            if !discovered[next.index()] {
                discovered[next.index()] = true;
                parents[next.index()] = Some(current);
                frontier.push_back(next);
            }
        }
    }

    None
}
