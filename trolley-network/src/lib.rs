//! Trolley network graph and route search.
//!
//! A small transit network of named stations joined by undirected routes,
//! with breadth-first, depth-first and shortest-path queries between stations.

pub mod domain;
pub mod network;
pub mod search;
