//! Search configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SearchError;

/// Environment variable selecting the search policy.
pub const POLICY_VAR: &str = "TROLLEY_POLICY";

/// Environment variable capping the number of stations explored.
pub const MAX_EXPLORED_VAR: &str = "TROLLEY_MAX_EXPLORED";

/// Which path-finding algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPolicy {
    /// Fewest routes travelled.
    Bfs,
    /// First path found by depth-first exploration.
    Dfs,
    /// Smallest total geometric distance.
    ShortestPath,
}

impl SearchPolicy {
    /// Every policy, in presentation order.
    pub const ALL: [SearchPolicy; 3] = [Self::Bfs, Self::Dfs, Self::ShortestPath];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::ShortestPath => "shortest_path",
        }
    }
}

impl fmt::Display for SearchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchPolicy {
    type Err = SearchError;

    /// Case-insensitive; `dijkstra` is accepted as a synonym for
    /// `shortest_path`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" | "shortest_path" => Ok(Self::ShortestPath),
            _ => Err(SearchError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Configuration parameters for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Algorithm to run.
    pub policy: SearchPolicy,

    /// Maximum number of stations to explore before giving up.
    /// `None` explores the whole reachable network.
    pub max_explored: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(policy: SearchPolicy, max_explored: Option<usize>) -> Self {
        Self {
            policy,
            max_explored,
        }
    }

    /// Unbounded search with the given policy.
    pub fn unbounded(policy: SearchPolicy) -> Self {
        Self::new(policy, None)
    }

    /// Same limits, different policy.
    pub fn with_policy(&self, policy: SearchPolicy) -> Self {
        Self {
            policy,
            ..self.clone()
        }
    }

    /// Build a configuration from named settings, falling back to the
    /// defaults for anything unset.
    ///
    /// `lookup` is typically `|key| std::env::var(key).ok()`; see
    /// [`POLICY_VAR`] and [`MAX_EXPLORED_VAR`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SearchError> {
        let mut config = Self::default();

        if let Some(policy) = lookup(POLICY_VAR) {
            config.policy = policy.parse()?;
        }

        if let Some(limit) = lookup(MAX_EXPLORED_VAR) {
            let limit = limit
                .trim()
                .parse::<usize>()
                .map_err(|_| SearchError::InvalidLimit(limit.clone()))?;
            config.max_explored = Some(limit);
        }

        Ok(config)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::ShortestPath,
            max_explored: None,
        }
    }
}
