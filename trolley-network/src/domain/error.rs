//! Domain error types.
//!
//! Structural facts about the graph that a caller may need to tell apart
//! from a legitimate result. Nothing here is transient, so nothing is
//! retried.

/// Errors raised by graph queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A query named a station the graph does not contain
    #[error("unknown station: {0}")]
    UnknownStation(String),
}
