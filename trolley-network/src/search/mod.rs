//! Path search over a trolley network.
//!
//! Three independent algorithms answer "how do I get from A to B":
//!
//! - [`breadth_first_search`]: fewest routes travelled
//! - [`depth_first_search`]: the first path depth-first exploration finds
//! - [`shortest_path`]: smallest total geometric distance
//!
//! Each works only through the graph's lookup, adjacency and edge-cost
//! queries, never mutates it, and keeps no state between calls. Unknown
//! station names and unreachable destinations both yield `None`.
//!
//! [`Planner`] runs the same algorithms selected by a [`SearchConfig`], with
//! an optional cap on how many stations may be explored.

mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod error;
mod path;
mod planner;

pub use config::{MAX_EXPLORED_VAR, POLICY_VAR, SearchConfig, SearchPolicy};
pub use error::SearchError;
pub use path::Path;
pub use planner::{Planner, SearchResult};

use crate::network::TrolleyGraph;

/// Fewest-hops path from `start` to `end`.
///
/// # Examples
///
/// ```
/// use trolley_network::network::NetworkBuilder;
/// use trolley_network::search::breadth_first_search;
///
/// let graph = NetworkBuilder::new()
///     .station("A", 0, 0)
///     .station("B", 3, 4)
///     .station("C", 6, 8)
///     .route("A", "B", 5, ())
///     .route("B", "C", 5, ())
///     .build();
///
/// let path = breadth_first_search(&graph, "A", "C").unwrap();
/// assert_eq!(path.stations(), ["A", "B", "C"]);
/// ```
pub fn breadth_first_search<D>(graph: &TrolleyGraph<D>, start: &str, end: &str) -> Option<Path> {
    run(graph, SearchPolicy::Bfs, start, end)
}

/// Some path from `start` to `end`, found depth-first in adjacency order.
pub fn depth_first_search<D>(graph: &TrolleyGraph<D>, start: &str, end: &str) -> Option<Path> {
    run(graph, SearchPolicy::Dfs, start, end)
}

/// Minimum total-distance path from `start` to `end`.
///
/// Edge costs are the rounded straight-line distances between stations,
/// as reported by [`TrolleyGraph::route_weight`].
pub fn shortest_path<D>(graph: &TrolleyGraph<D>, start: &str, end: &str) -> Option<Path> {
    run(graph, SearchPolicy::ShortestPath, start, end)
}

fn run<D>(graph: &TrolleyGraph<D>, policy: SearchPolicy, start: &str, end: &str) -> Option<Path> {
    let config = SearchConfig::unbounded(policy);
    Planner::new(graph, &config).search(start, end).path
}

/// Counts station expansions against an optional limit.
#[derive(Debug)]
struct Budget {
    limit: Option<usize>,
    spent: usize,
    exhausted: bool,
}

impl Budget {
    fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            spent: 0,
            exhausted: false,
        }
    }

    /// Record one expansion. Returns false, and marks the budget exhausted,
    /// if the limit has already been reached.
    fn spend(&mut self) -> bool {
        if self.limit.is_some_and(|limit| self.spent >= limit) {
            self.exhausted = true;
            return false;
        }
        self.spent += 1;
        true
    }

    fn spent(&self) -> usize {
        self.spent
    }

    fn exhausted(&self) -> bool {
        self.exhausted
    }
}
