use crate::coordinate::Coordinate;
use crate::real::Real;
use serde::{Deserialize, Serialize};

/// A latitude/longitude aligned box given by its four edges in degrees.
///
/// Boxes produced by the engine for the same grid cell are bound-wise equal,
/// which is what makes them usable as cache keys. With a decimal scalar the
/// box is also `Eq + Hash` and can key a `HashMap` directly.
///
/// # Examples
///
/// ```
/// use geotile_types::bbox::BoundingBox;
/// use geotile_types::coordinate::Coordinate;
///
/// let bbox = BoundingBox::new(41.0, -72.0, 40.0, -74.0);
/// assert_eq!(bbox.center(), Coordinate::new(40.5, -73.0));
/// assert!(bbox.contains(&Coordinate::new(40.0, -73.0)));
/// assert!(!bbox.contains(&Coordinate::new(40.5, -72.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox<T> {
    /// Northern edge (maximum latitude)
    pub north: T,
    /// Eastern edge (maximum longitude)
    pub east: T,
    /// Southern edge (minimum latitude)
    pub south: T,
    /// Western edge (minimum longitude)
    pub west: T,
}

impl<T> BoundingBox<T> {
    /// Create a box from its edges in (north, east, south, west) order.
    pub const fn new(north: T, east: T, south: T, west: T) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// The edges as a `(north, east, south, west)` tuple.
    pub fn to_tuple(self) -> (T, T, T, T) {
        (self.north, self.east, self.south, self.west)
    }
}

impl<T: Real> BoundingBox<T> {
    /// Midpoint of the box in degree space.
    pub fn center(&self) -> Coordinate<T> {
        let two = T::two();
        Coordinate::new(
            (self.north + self.south) / two,
            (self.east + self.west) / two,
        )
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> T {
        self.east - self.west
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> T {
        self.north - self.south
    }

    /// Check whether a coordinate falls inside the box.
    ///
    /// Latitude bounds are inclusive, longitude bounds are exclusive: a point
    /// on the north or south edge is inside, a point on the east or west edge
    /// is not.
    pub fn contains(&self, coordinate: &Coordinate<T>) -> bool {
        self.south <= coordinate.lat
            && coordinate.lat <= self.north
            && self.west < coordinate.lon
            && coordinate.lon < self.east
    }
}

impl<T> From<(T, T, T, T)> for BoundingBox<T> {
    fn from((north, east, south, west): (T, T, T, T)) -> Self {
        Self::new(north, east, south, west)
    }
}

impl From<BoundingBox<f64>> for geo::Rect<f64> {
    fn from(bbox: BoundingBox<f64>) -> Self {
        geo::Rect::new(
            geo::coord! { x: bbox.west, y: bbox.south },
            geo::coord! { x: bbox.east, y: bbox.north },
        )
    }
}
