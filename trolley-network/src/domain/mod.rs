//! Domain types for the trolley network.
//!
//! Stations, routes and the errors graph queries can report. These are the
//! value types shared by the graph store and the search engine.

mod error;
mod route;
mod station;

pub use error::GraphError;
pub use route::Route;
pub use station::{Coord, Station, StationId};
