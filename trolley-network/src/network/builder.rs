//! Fluent construction of trolley networks.

use super::TrolleyGraph;

/// Builder for a [`TrolleyGraph`].
///
/// Applies the same rules as the graph itself: duplicate stations and
/// routes to unknown stations are silently dropped, so stations must be
/// added before the routes that reference them.
///
/// # Example
///
/// ```
/// use trolley_network::network::NetworkBuilder;
///
/// let graph = NetworkBuilder::new()
///     .station("A", 0, 0)
///     .station("B", 3, 4)
///     .link("A", "B", "blue")
///     .build();
///
/// let (_, _, route) = graph.routes().next().unwrap();
/// assert_eq!(route.weight(), 5);
/// assert_eq!(*route.display(), "blue");
/// ```
#[derive(Debug)]
pub struct NetworkBuilder<D = ()> {
    inner: TrolleyGraph<D>,
}

impl<D> Default for NetworkBuilder<D> {
    fn default() -> Self {
        Self {
            inner: TrolleyGraph::new(),
        }
    }
}

impl<D> NetworkBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.
    pub fn station(mut self, name: &str, x: i32, y: i32) -> Self {
        self.inner.add_station(name, x, y);
        self
    }

    /// Add a route with an explicit weight.
    pub fn route(mut self, from: &str, to: &str, weight: u64, display: D) -> Self {
        self.inner.add_route(from, to, weight, display);
        self
    }

    /// Add a route whose stored weight is the stations' rounded distance.
    ///
    /// Dropped, like any other route, if either station is unknown.
    pub fn link(mut self, from: &str, to: &str, display: D) -> Self {
        if let Ok(weight) = self.inner.route_weight(from, to) {
            self.inner.add_route(from, to, weight, display);
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> TrolleyGraph<D> {
        self.inner
    }
}
