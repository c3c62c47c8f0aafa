//! Weighted shortest-path search.
//!
//! Dijkstra's algorithm over the geometric edge costs the graph computes.
//! The frontier is a min-heap keyed on `(distance, insertion sequence)`:
//! the entry extracted next is always the closest one, and ties go to the
//! entry pushed first, so results are reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::Budget;
use super::path::{Path, reconstruct};
use crate::domain::StationId;
use crate::network::TrolleyGraph;

/// Heap entry. Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    distance: u64,
    sequence: u64,
    station: StationId,
}

/// Find a minimum-total-weight path from `start` to `end`.
///
/// When a neighbour's best-known distance improves, its parent is updated
/// and it is pushed again with the new distance. The superseded entry stays
/// in the heap and is skipped when popped. O((V + E) log V).
pub(super) fn find<D>(
    graph: &TrolleyGraph<D>,
    start: StationId,
    end: StationId,
    budget: &mut Budget,
) -> Option<Path> {
    let stations = graph.station_count();
    // None is infinity
    let mut distances: Vec<Option<u64>> = vec![None; stations];
    let mut parents: Vec<Option<StationId>> = vec![None; stations];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    distances[start.index()] = Some(0);
    frontier.push(Reverse(FrontierEntry {
        distance: 0,
        sequence,
        station: start,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let current = entry.station;

        // Distances only ever shrink, so a mismatch means a newer entry exists
        if distances[current.index()] != Some(entry.distance) {
            continue;
        }

        if !budget.spend() {
            return None;
        }

        trace!(
            station = graph.name_of(current),
            distance = entry.distance,
            frontier = frontier.len(),
            "shortest-path settling station"
        );

        if current == end {
            return reconstruct(graph, &parents, start, end);
        }

        for next in graph.neighbours(current) {
            let candidate = entry
                .distance
                .saturating_add(graph.weight_between(current, next));

            if distances[next.index()].is_none_or(|best| candidate < best) {
                distances[next.index()] = Some(candidate);
                parents[next.index()] = Some(current);
                sequence += 1;
                frontier.push(Reverse(FrontierEntry {
                    distance: candidate,
                    sequence,
                    station: next,
                }));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(distance: u64, sequence: u64) -> Reverse<FrontierEntry> {
        Reverse(FrontierEntry {
            distance,
            sequence,
            station: StationId(0),
        })
    }

    #[test]
    fn frontier_pops_smallest_distance_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(30, 0));
        heap.push(entry(10, 1));
        heap.push(entry(20, 2));

        let order: Vec<u64> =
            std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.distance)).collect();
        assert_eq!(order, vec![10, 20, 30]);
    }

    #[test]
    fn frontier_breaks_ties_by_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5, 2));
        heap.push(entry(5, 0));
        heap.push(entry(5, 1));

        let order: Vec<u64> =
            std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.sequence)).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
