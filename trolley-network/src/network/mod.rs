//! The graph store.
//!
//! Owns stations and routes, answers lookups by name and adjacency
//! queries, and is the only place edge costs are computed.

mod builder;
mod graph;
mod shared;

pub use builder::NetworkBuilder;
pub use graph::TrolleyGraph;
pub use shared::SharedNetwork;
