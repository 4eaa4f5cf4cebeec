use crate::real::Real;
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Values are not range-checked or wrapped; see `geotile::normalize` for
/// explicit caller-side helpers.
///
/// # Examples
///
/// ```
/// use geotile_types::coordinate::Coordinate;
///
/// let rochester = Coordinate::new(43.1553, -77.6090);
/// assert_eq!(rochester.lat, 43.1553);
/// assert_eq!(rochester.lon, -77.6090);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate<T> {
    /// Latitude in degrees (positive north)
    pub lat: T,
    /// Longitude in degrees (positive east)
    pub lon: T,
}

impl<T> Coordinate<T> {
    pub const fn new(lat: T, lon: T) -> Self {
        Self { lat, lon }
    }
}

impl<T: Real> Coordinate<T> {
    /// Returns `true` when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl<T> From<(T, T)> for Coordinate<T> {
    fn from((lat, lon): (T, T)) -> Self {
        Self::new(lat, lon)
    }
}

impl<T> From<Coordinate<T>> for (T, T) {
    fn from(coordinate: Coordinate<T>) -> Self {
        (coordinate.lat, coordinate.lon)
    }
}

/// `geo` points are (x, y) = (longitude, latitude).
impl From<Coordinate<f64>> for geo::Point<f64> {
    fn from(coordinate: Coordinate<f64>) -> Self {
        geo::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<geo::Point<f64>> for Coordinate<f64> {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Extracts the coordinate a value is located at.
///
/// Used by the radius and rectangle filters so callers can filter their own
/// records without first projecting them to coordinates.
///
/// # Examples
///
/// ```
/// use geotile_types::coordinate::{Coordinate, Located};
///
/// struct Store {
///     name: &'static str,
///     position: Coordinate<f64>,
/// }
///
/// impl Located<f64> for Store {
///     fn location(&self) -> Coordinate<f64> {
///         self.position
///     }
/// }
///
/// let store = Store { name: "downtown", position: Coordinate::new(43.15, -77.61) };
/// assert_eq!(store.location().lat, 43.15);
/// ```
pub trait Located<T> {
    fn location(&self) -> Coordinate<T>;
}

impl<T: Copy> Located<T> for Coordinate<T> {
    fn location(&self) -> Coordinate<T> {
        *self
    }
}

/// Tuples are read as `(lat, lon)`.
impl<T: Copy> Located<T> for (T, T) {
    fn location(&self) -> Coordinate<T> {
        Coordinate::new(self.0, self.1)
    }
}

impl<T, L: Located<T> + ?Sized> Located<T> for &L {
    fn location(&self) -> Coordinate<T> {
        (**self).location()
    }
}
