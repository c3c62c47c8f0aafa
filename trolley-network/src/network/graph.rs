//! The graph store.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{GraphError, Route, Station, StationId};

/// One direction of a route, indexed from its source station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HalfEdge {
    pub(crate) to: StationId,
    pub(crate) route: usize,
}

/// A trolley network: named stations joined by undirected routes.
///
/// Stations live in an arena indexed by [`StationId`], with a name index on
/// top. Every route is stored once and indexed from both endpoints as two
/// directed half-edges, so adjacency lookups cost O(degree) and keep route
/// insertion order.
///
/// `D` is the route display payload. The graph stores it and hands it back
/// but never looks inside.
///
/// Nothing is ever removed. Inserts that would break an invariant
/// (duplicate station name, route to an unknown station) are dropped
/// without error.
///
/// # Examples
///
/// ```
/// use trolley_network::network::TrolleyGraph;
///
/// let mut graph = TrolleyGraph::new();
/// graph.add_station("A", 0, 0);
/// graph.add_station("B", 3, 4);
/// graph.add_route("A", "B", 5, ());
///
/// assert_eq!(graph.adjacent_stations("A"), vec!["B"]);
/// assert_eq!(graph.adjacent_stations("B"), vec!["A"]);
/// assert_eq!(graph.route_weight("A", "B"), Ok(5));
/// ```
#[derive(Debug, Clone)]
pub struct TrolleyGraph<D = ()> {
    stations: Vec<Station>,
    by_name: HashMap<String, StationId>,
    routes: Vec<Route<D>>,
    /// Outgoing half-edges per station, parallel to `stations`.
    adjacency: Vec<Vec<HalfEdge>>,
}

impl<D> Default for TrolleyGraph<D> {
    fn default() -> Self {
        Self {
            stations: Vec::new(),
            by_name: HashMap::new(),
            routes: Vec::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<D> TrolleyGraph<D> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station at `(x, y)`.
    ///
    /// If a station with this name already exists the call is a no-op and the
    /// original coordinates are kept. Returns whether a station was inserted.
    pub fn add_station(&mut self, name: &str, x: i32, y: i32) -> bool {
        if self.by_name.contains_key(name) {
            debug!(station = name, "ignoring duplicate station");
            return false;
        }

        let id = StationId(self.stations.len());
        self.stations.push(Station::new(name, x, y));
        self.adjacency.push(Vec::new());
        self.by_name.insert(name.to_string(), id);
        true
    }

    /// Look up a station by exact name.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.resolve(name).map(|id| &self.stations[id.0])
    }

    /// Names of every station in the graph.
    pub fn all_station_names(&self) -> HashSet<&str> {
        self.stations.iter().map(Station::name).collect()
    }

    /// Add an undirected route between two existing stations.
    ///
    /// Both directions are added, or neither: if either name is unknown the
    /// call is a no-op. Returns whether the route was inserted.
    pub fn add_route(&mut self, from: &str, to: &str, weight: u64, display: D) -> bool {
        let (Some(from_id), Some(to_id)) = (self.resolve(from), self.resolve(to)) else {
            debug!(from, to, "ignoring route with unknown endpoint");
            return false;
        };

        let route = self.routes.len();
        self.routes.push(Route::new(from_id, to_id, weight, display));
        self.adjacency[from_id.0].push(HalfEdge { to: to_id, route });
        self.adjacency[to_id.0].push(HalfEdge { to: from_id, route });
        true
    }

    /// Names of the stations one half-edge away from `name`.
    ///
    /// Order follows route insertion order, and a station appears once per
    /// route joining it to `name`. An unknown name yields an empty list.
    pub fn adjacent_stations(&self, name: &str) -> Vec<&str> {
        match self.resolve(name) {
            Some(id) => self.neighbours(id).map(|n| self.name_of(n)).collect(),
            None => Vec::new(),
        }
    }

    /// Edge cost between two stations: their rounded straight-line distance.
    ///
    /// This is computed from the station coordinates and ignores any weight
    /// stored on a route; no route between the two is required.
    pub fn route_weight(&self, from: &str, to: &str) -> Result<u64, GraphError> {
        let from_id = self
            .resolve(from)
            .ok_or_else(|| GraphError::UnknownStation(from.to_string()))?;
        let to_id = self
            .resolve(to)
            .ok_or_else(|| GraphError::UnknownStation(to.to_string()))?;
        Ok(self.weight_between(from_id, to_id))
    }

    /// The first route added between `from` and `to`, in either direction.
    ///
    /// Searches never consult routes for cost; this is how a caller gets back
    /// the display payload for one leg of a path.
    pub fn route_between(&self, from: &str, to: &str) -> Option<&Route<D>> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        self.edges(from_id)
            .iter()
            .find(|e| e.to == to_id)
            .map(|e| &self.routes[e.route])
    }

    /// All stations, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.iter()
    }

    /// All routes as `(from, to, route)`, in insertion order.
    ///
    /// Each route appears once even though it is traversable both ways.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, &Route<D>)> + '_ {
        self.routes
            .iter()
            .map(|r| (self.name_of(r.from()), self.name_of(r.to()), r))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Resolve a name to its arena id.
    pub fn resolve(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    /// Ids of the stations one half-edge away from `id`, in route insertion
    /// order.
    pub fn neighbours(&self, id: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.edges(id).iter().map(|e| e.to)
    }

    /// Outgoing half-edges of `id`; empty for an id this graph never issued.
    pub(crate) fn edges(&self, id: StationId) -> &[HalfEdge] {
        self.adjacency.get(id.0).map_or(&[], Vec::as_slice)
    }

    /// Name of a station. `id` must have been issued by this graph.
    pub(crate) fn name_of(&self, id: StationId) -> &str {
        self.stations[id.0].name()
    }

    /// Geometric edge cost. Both ids must have been issued by this graph.
    pub(crate) fn weight_between(&self, from: StationId, to: StationId) -> u64 {
        self.stations[from.0].distance_to(&self.stations[to.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> TrolleyGraph {
        let mut graph = TrolleyGraph::new();
        graph.add_station("A", 0, 0);
        graph.add_station("B", 3, 4);
        graph.add_station("C", 6, 8);
        graph.add_route("A", "B", 5, ());
        graph.add_route("B", "C", 5, ());
        graph
    }

    #[test]
    fn empty_graph() {
        let graph: TrolleyGraph = TrolleyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.station_count(), 0);
        assert_eq!(graph.route_count(), 0);
        assert!(graph.all_station_names().is_empty());
        assert!(graph.station_by_name("A").is_none());
    }

    #[test]
    fn add_and_lookup_station() {
        let mut graph: TrolleyGraph = TrolleyGraph::new();
        assert!(graph.add_station("Depot", 1, 2));

        let depot = graph.station_by_name("Depot").unwrap();
        assert_eq!(depot.name(), "Depot");
        assert_eq!((depot.x(), depot.y()), (1, 2));
    }

    #[test]
    fn duplicate_station_keeps_first_coordinates() {
        let mut graph: TrolleyGraph = TrolleyGraph::new();
        assert!(graph.add_station("Depot", 1, 2));
        assert!(!graph.add_station("Depot", 50, 60));

        assert_eq!(graph.station_count(), 1);
        let depot = graph.station_by_name("Depot").unwrap();
        assert_eq!((depot.x(), depot.y()), (1, 2));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut graph: TrolleyGraph = TrolleyGraph::new();
        graph.add_station("Depot", 0, 0);
        assert!(graph.station_by_name("depot").is_none());
        assert!(graph.add_station("depot", 5, 5));
        assert_eq!(graph.station_count(), 2);
    }

    #[test]
    fn all_station_names() {
        let graph = abc();
        let names = graph.all_station_names();
        assert_eq!(names, HashSet::from(["A", "B", "C"]));
    }

    #[test]
    fn route_is_bidirectional() {
        let graph = abc();
        assert_eq!(graph.adjacent_stations("A"), vec!["B"]);
        assert_eq!(graph.adjacent_stations("B"), vec!["A", "C"]);
        assert_eq!(graph.adjacent_stations("C"), vec!["B"]);
    }

    #[test]
    fn route_to_unknown_station_is_dropped() {
        let mut graph = abc();
        assert!(!graph.add_route("A", "Z", 1, ()));
        assert!(!graph.add_route("Z", "A", 1, ()));
        assert!(!graph.add_route("Y", "Z", 1, ()));

        assert_eq!(graph.route_count(), 2);
        assert_eq!(graph.adjacent_stations("A"), vec!["B"]);
        assert!(graph.adjacent_stations("Z").is_empty());
    }

    #[test]
    fn adjacency_follows_route_insertion_order() {
        let mut graph: TrolleyGraph = TrolleyGraph::new();
        for name in ["Hub", "N", "E", "S", "W"] {
            graph.add_station(name, 0, 0);
        }
        graph.add_route("Hub", "S", 1, ());
        graph.add_route("W", "Hub", 1, ());
        graph.add_route("Hub", "N", 1, ());
        graph.add_route("E", "Hub", 1, ());

        assert_eq!(graph.adjacent_stations("Hub"), vec!["S", "W", "N", "E"]);
    }

    #[test]
    fn parallel_routes_repeat_in_adjacency() {
        let mut graph = abc();
        graph.add_route("A", "B", 9, ());
        assert_eq!(graph.adjacent_stations("A"), vec!["B", "B"]);
        assert_eq!(graph.route_count(), 3);
    }

    #[test]
    fn self_loop_appears_twice() {
        let mut graph = abc();
        graph.add_route("A", "A", 0, ());
        assert_eq!(graph.adjacent_stations("A"), vec!["B", "A", "A"]);
    }

    #[test]
    fn unknown_station_has_no_neighbours() {
        let graph = abc();
        assert!(graph.adjacent_stations("Nowhere").is_empty());
    }

    #[test]
    fn route_weight_is_geometric() {
        let graph = abc();
        assert_eq!(graph.route_weight("A", "B"), Ok(5));
        assert_eq!(graph.route_weight("B", "C"), Ok(5));
        // No route needed
        assert_eq!(graph.route_weight("A", "C"), Ok(10));
        assert_eq!(graph.route_weight("A", "A"), Ok(0));
    }

    #[test]
    fn route_weight_ignores_stored_weight() {
        let mut graph: TrolleyGraph = TrolleyGraph::new();
        graph.add_station("A", 0, 0);
        graph.add_station("B", 3, 4);
        graph.add_route("A", "B", 1000, ());
        assert_eq!(graph.route_weight("A", "B"), Ok(5));
    }

    #[test]
    fn route_weight_unknown_station() {
        let graph = abc();
        assert_eq!(
            graph.route_weight("A", "Z"),
            Err(GraphError::UnknownStation("Z".into()))
        );
        assert_eq!(
            graph.route_weight("Y", "A"),
            Err(GraphError::UnknownStation("Y".into()))
        );
    }

    #[test]
    fn routes_listed_once_with_payload() {
        let mut graph = TrolleyGraph::new();
        graph.add_station("A", 0, 0);
        graph.add_station("B", 0, 1);
        graph.add_route("A", "B", 7, "green");

        let routes: Vec<_> = graph.routes().collect();
        assert_eq!(routes.len(), 1);
        let (from, to, route) = routes[0];
        assert_eq!((from, to), ("A", "B"));
        assert_eq!(route.weight(), 7);
        assert_eq!(*route.display(), "green");
    }

    #[test]
    fn route_between_either_direction() {
        let mut graph = TrolleyGraph::new();
        graph.add_station("A", 0, 0);
        graph.add_station("B", 0, 1);
        graph.add_station("C", 0, 2);
        graph.add_route("A", "B", 1, "red");
        graph.add_route("B", "A", 1, "blue");

        assert_eq!(graph.route_between("A", "B").map(Route::display), Some(&"red"));
        assert_eq!(graph.route_between("B", "A").map(Route::display), Some(&"red"));
        assert!(graph.route_between("A", "C").is_none());
        assert!(graph.route_between("A", "Z").is_none());
    }

    #[test]
    fn stations_in_insertion_order() {
        let graph = abc();
        let names: Vec<_> = graph.stations().map(Station::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn ids_are_dense() {
        let graph = abc();
        assert_eq!(graph.resolve("A").map(StationId::index), Some(0));
        assert_eq!(graph.resolve("C").map(StationId::index), Some(2));
        assert_eq!(graph.station(StationId(1)).map(Station::name), Some("B"));
        assert!(graph.station(StationId(3)).is_none());
        assert!(graph.edges(StationId(99)).is_empty());
    }
}
