//! Lock-guarded graph handle.

use std::sync::{Arc, PoisonError, RwLock};

use super::TrolleyGraph;

/// Thread-safe handle to a graph that is still being edited.
///
/// A graph that is built once and then only read needs none of this: share
/// `&TrolleyGraph` (or an `Arc`) directly. This handle is for the case where
/// inserts and searches interleave, and serializes them behind one lock.
///
/// Inserts are single pushes that leave the graph consistent at every step,
/// so a writer that panicked does not leave a half-built state behind and a
/// poisoned lock is simply taken over.
#[derive(Debug)]
pub struct SharedNetwork<D = ()> {
    inner: Arc<RwLock<TrolleyGraph<D>>>,
}

impl<D> Clone for SharedNetwork<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> Default for SharedNetwork<D> {
    fn default() -> Self {
        Self::new(TrolleyGraph::new())
    }
}

impl<D> SharedNetwork<D> {
    /// Wrap an existing graph.
    pub fn new(graph: TrolleyGraph<D>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run `f` with shared access to the graph.
    pub fn read<R>(&self, f: impl FnOnce(&TrolleyGraph<D>) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the graph.
    pub fn write<R>(&self, f: impl FnOnce(&mut TrolleyGraph<D>) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Add a station. See [`TrolleyGraph::add_station`].
    pub fn add_station(&self, name: &str, x: i32, y: i32) -> bool {
        self.write(|graph| graph.add_station(name, x, y))
    }

    /// Add a route. See [`TrolleyGraph::add_route`].
    pub fn add_route(&self, from: &str, to: &str, weight: u64, display: D) -> bool {
        self.write(|graph| graph.add_route(from, to, weight, display))
    }
}
