//! Search error types.

/// Errors from configuring a search.
///
/// Running a search never fails: unknown stations and unreachable
/// destinations both come back as "no path".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Policy name not recognised
    #[error("unknown search policy: {0} (expected bfs, dfs, dijkstra or shortest_path)")]
    UnknownPolicy(String),

    /// Exploration limit is not a non-negative integer
    #[error("invalid exploration limit: {0}")]
    InvalidLimit(String),
}
