//! Search results as station-name sequences.

use serde::Serialize;

use crate::domain::{GraphError, StationId};
use crate::network::TrolleyGraph;

/// An ordered walk through the network, from the start station to the end
/// station inclusive.
///
/// A path is never empty. A search from a station to itself yields a
/// one-station path with zero hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    stations: Vec<String>,
}

impl Path {
    /// Station names in travel order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// The start station.
    pub fn first(&self) -> &str {
        &self.stations[0]
    }

    /// The end station.
    pub fn last(&self) -> &str {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of routes travelled.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    pub fn into_names(self) -> Vec<String> {
        self.stations
    }

    /// Sum of the geometric edge costs along the path.
    ///
    /// Fails if `graph` does not contain every station on the path, which
    /// can only happen when the path came from a different graph.
    pub fn total_weight<D>(&self, graph: &TrolleyGraph<D>) -> Result<u64, GraphError> {
        self.stations.windows(2).try_fold(0u64, |total, pair| {
            Ok(total.saturating_add(graph.route_weight(&pair[0], &pair[1])?))
        })
    }

    /// Whether every consecutive pair of stations is joined by a route in
    /// `graph`.
    pub fn follows_routes<D>(&self, graph: &TrolleyGraph<D>) -> bool {
        graph.station_by_name(self.first()).is_some()
            && self
                .stations
                .windows(2)
                .all(|pair| graph.adjacent_stations(&pair[0]).contains(&pair[1].as_str()))
    }
}

/// Walk parent links back from `end` to `start`.
///
/// Returns `None` if the chain breaks before reaching `start`, or runs
/// longer than the graph has stations (a cycle in the parent links).
pub(crate) fn reconstruct<D>(
    graph: &TrolleyGraph<D>,
    parents: &[Option<StationId>],
    start: StationId,
    end: StationId,
) -> Option<Path> {
    let mut ids = vec![end];
    let mut current = end;

    while current != start {
        current = (*parents.get(current.index())?)?;
        ids.push(current);
        if ids.len() > graph.station_count() {
            return None;
        }
    }

    let stations = ids
        .into_iter()
        .rev()
        .map(|id| graph.name_of(id).to_string())
        .collect();
    Some(Path { stations })
}
