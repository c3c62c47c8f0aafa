//! Depth-first search.
//!
//! Follows adjacency order as deep as it can before backtracking, and stops
//! at the first path that reaches the end station. That path is valid but
//! not necessarily short.

use tracing::trace;

use super::Budget;
use super::path::{Path, reconstruct};
use crate::domain::StationId;
use crate::network::TrolleyGraph;

/// Find some path from `start` to `end`.
///
/// Uses an explicit stack of `(station, next neighbour index)` frames rather
/// than recursion, visiting stations in exactly the order a recursive
/// descent would while staying safe on long chains. O(V + E).
pub(super) fn find<D>(
    graph: &TrolleyGraph<D>,
    start: StationId,
    end: StationId,
    budget: &mut Budget,
) -> Option<Path> {
    let stations = graph.station_count();
    let mut visited = vec![false; stations];
    let mut parents: Vec<Option<StationId>> = vec![None; stations];

    if !budget.spend() {
        return None;
    }
    if start == end {
        return reconstruct(graph, &parents, start, end);
    }

    visited[start.index()] = true;
    let mut stack: Vec<(StationId, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let current = frame.0;
        let Some(edge) = graph.edges(current).get(frame.1) else {
            // Every neighbour tried: backtrack
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let next = edge.to;
        if visited[next.index()] {
            continue;
        }

        parents[next.index()] = Some(current);
        if !budget.spend() {
            return None;
        }

        trace!(
            station = graph.name_of(next),
            depth = stack.len(),
            "DFS descending"
        );

        if next == end {
            return reconstruct(graph, &parents, start, end);
        }

        visited[next.index()] = true;
        stack.push((next, 0));
    }

    None
}
