//! Policy-driven search entry point.

use serde::Serialize;
use tracing::debug;

use super::config::{SearchConfig, SearchPolicy};
use super::path::Path;
use super::{Budget, bfs, dfs, dijkstra};
use crate::network::TrolleyGraph;

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Algorithm that produced this result.
    pub policy: SearchPolicy,

    /// The path found, or `None` if there is none (or the search was cut
    /// short before finding one).
    pub path: Option<Path>,

    /// Number of stations the search expanded.
    pub stations_explored: usize,

    /// Whether the exploration limit stopped the search.
    pub truncated: bool,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty(policy: SearchPolicy) -> Self {
        Self {
            policy,
            path: None,
            stations_explored: 0,
            truncated: false,
        }
    }
}

/// Runs searches over one graph with one configuration.
pub struct Planner<'a, D> {
    graph: &'a TrolleyGraph<D>,
    config: &'a SearchConfig,
}

impl<'a, D> Planner<'a, D> {
    /// Create a new planner.
    pub fn new(graph: &'a TrolleyGraph<D>, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for a path from `start` to `end`.
    ///
    /// Unknown station names are not an error: they behave like stations
    /// nothing can reach, and the result has no path.
    pub fn search(&self, start: &str, end: &str) -> SearchResult {
        let policy = self.config.policy;

        let (Some(start_id), Some(end_id)) = (self.graph.resolve(start), self.graph.resolve(end))
        else {
            debug!(start, end, %policy, "search names an unknown station");
            return SearchResult::empty(policy);
        };

        let mut budget = Budget::new(self.config.max_explored);
        let path = match policy {
            SearchPolicy::Bfs => bfs::find(self.graph, start_id, end_id, &mut budget),
            SearchPolicy::Dfs => dfs::find(self.graph, start_id, end_id, &mut budget),
            SearchPolicy::ShortestPath => {
                dijkstra::find(self.graph, start_id, end_id, &mut budget)
            }
        };

        debug!(
            start,
            end,
            %policy,
            found = path.is_some(),
            hops = path.as_ref().map(Path::hops),
            stations_explored = budget.spent(),
            truncated = budget.exhausted(),
            "search complete"
        );

        SearchResult {
            policy,
            path,
            stations_explored: budget.spent(),
            truncated: budget.exhausted(),
        }
    }
}
