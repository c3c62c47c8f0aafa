//! Route type.

use super::StationId;

/// An undirected connection between two stations.
///
/// The graph stores one `Route` per insertion and indexes it from both
/// endpoints, so the two directions always share the same weight and
/// display payload.
///
/// `weight` is the value the caller supplied. Searches do not read it: edge
/// costs come from station geometry (see `TrolleyGraph::route_weight`).
/// `display` is an opaque payload (a colour, a style, anything) carried for
/// the presentation layer and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<D = ()> {
    from: StationId,
    to: StationId,
    weight: u64,
    display: D,
}

impl<D> Route<D> {
    pub(crate) fn new(from: StationId, to: StationId, weight: u64, display: D) -> Self {
        Self {
            from,
            to,
            weight,
            display,
        }
    }

    /// The endpoint named first when the route was added.
    pub fn from(&self) -> StationId {
        self.from
    }

    /// The endpoint named second when the route was added.
    pub fn to(&self) -> StationId {
        self.to
    }

    /// The weight supplied when the route was added.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The display payload supplied when the route was added.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns the endpoint opposite `station`, or `None` if `station` is
    /// not an endpoint of this route.
    pub fn other_end(&self, station: StationId) -> Option<StationId> {
        if station == self.from {
            Some(self.to)
        } else if station == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let route = Route::new(StationId(0), StationId(1), 42, "red");
        assert_eq!(route.from(), StationId(0));
        assert_eq!(route.to(), StationId(1));
        assert_eq!(route.weight(), 42);
        assert_eq!(*route.display(), "red");
    }

    #[test]
    fn other_end() {
        let route = Route::new(StationId(3), StationId(5), 1, ());
        assert_eq!(route.other_end(StationId(3)), Some(StationId(5)));
        assert_eq!(route.other_end(StationId(5)), Some(StationId(3)));
        assert_eq!(route.other_end(StationId(4)), None);
    }

    #[test]
    fn self_loop_other_end() {
        let route = Route::new(StationId(2), StationId(2), 0, ());
        assert_eq!(route.other_end(StationId(2)), Some(StationId(2)));
    }
}
