//! Station and coordinate types.

use std::fmt;

/// A position on the network's 2-D plane.
///
/// Coordinates carry no units; only the distances between them matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`, rounded to the nearest integer.
    ///
    /// Halves round away from zero, so `(0,0)` to `(1,1)` (≈1.414) is 1
    /// and a distance of exactly 2.5 is 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use trolley_network::domain::Coord;
    ///
    /// let a = Coord::new(0, 0);
    /// let b = Coord::new(3, 4);
    /// assert_eq!(a.distance_to(b), 5);
    /// assert_eq!(b.distance_to(a), 5);
    /// ```
    pub fn distance_to(self, other: Coord) -> u64 {
        // Widen before subtracting: i32::MAX - i32::MIN overflows i32.
        let dx = (i64::from(other.x) - i64::from(self.x)) as f64;
        let dy = (i64::from(other.y) - i64::from(self.y)) as f64;
        (dx * dx + dy * dy).sqrt().round() as u64
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Arena index of a station inside the graph that created it.
///
/// Ids are handed out densely in insertion order. They are only meaningful
/// for the graph that issued them; the public identity of a station is
/// still its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub(crate) usize);

impl StationId {
    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named stop on the network.
///
/// Names are case-sensitive and compared by exact equality. Stations are
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: String,
    position: Coord,
}

impl Station {
    /// Creates a station at `(x, y)`.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            position: Coord::new(x, y),
        }
    }

    /// Returns the station's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the station's position.
    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Rounded straight-line distance to another station.
    pub fn distance_to(&self, other: &Station) -> u64 {
        self.position.distance_to(other.position)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.position)
    }
}
