//! Spherical-earth offset, distance and box geometry.
//!
//! All linear quantities (offsets, radii, widths, heights, distances) are in
//! the engine's configured [`Unit`]; all angular quantities are in degrees.
//! One degree of latitude is treated as 60 nautical miles everywhere, and a
//! degree of longitude shrinks with `cos(lat)`.

use crate::config::{Config, Constants};
use crate::error::{GeoTileError, Result};
use geotile_types::bbox::BoundingBox;
use geotile_types::coordinate::Coordinate;
use geotile_types::real::Real;
use geotile_types::unit::Unit;

/// Computes offsets, distances, boxes and grid-snapped centerpoints.
///
/// The scalar type `T` is the numeric strategy: `f64` for speed, or
/// `rust_decimal::Decimal` (feature `decimal`) for reproducible decimal
/// output. An engine is immutable once built and every method is a pure
/// function of its arguments, so one engine can be shared freely across
/// threads.
///
/// # Examples
///
/// ```rust
/// use geotile::{Coordinate, GeometryEngine, Unit};
///
/// let engine = GeometryEngine::<f64>::new(Unit::Miles);
///
/// let lax = Coordinate::new(33.95, -118.4);
/// let jfk = Coordinate::new(40.6333, -73.7833);
/// let miles = engine.distance(lax, jfk);
/// assert!((miles - 2467.27).abs() < 1.0);
///
/// let bbox = engine.bbox(jfk, 5.0)?;
/// assert!(bbox.north > jfk.lat && bbox.west < jfk.lon);
/// # Ok::<(), geotile::GeoTileError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeometryEngine<T> {
    config: Config,
    constants: Constants<T>,
}

impl<T: Real> GeometryEngine<T> {
    /// Create an engine for `unit` with default settings.
    pub fn new(unit: Unit) -> Self {
        Self::from_parts(Config::default().with_unit(unit))
    }

    /// Create an engine from validated settings.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(GeoTileError::InvalidConfig)?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: Config) -> Self {
        let constants = Constants::for_unit(config.unit);
        log::debug!(
            "Geometry engine ready: unit={}, range_partial={}",
            config.unit,
            constants.range_partial
        );
        Self { config, constants }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn constants(&self) -> &Constants<T> {
        &self.constants
    }

    pub fn unit(&self) -> Unit {
        self.config.unit
    }

    /// Great-circle distance between two coordinates, in engine units.
    ///
    /// Uses the haversine form of the central angle on a sphere where one
    /// degree of arc is 60 nautical miles. Longitudes enter the formula by
    /// magnitude, so the result is only meaningful for two points in the
    /// same hemisphere east/west of Greenwich. Over long distances the
    /// spherical model can be off by about a mile.
    ///
    /// The result is exactly symmetric in its arguments.
    pub fn distance(&self, from: Coordinate<T>, to: Coordinate<T>) -> T {
        let rad = self.constants.rad;
        let two = T::two();

        let lat1 = from.lat * rad;
        let lat2 = to.lat * rad;
        let lon1 = from.lon.abs() * rad;
        let lon2 = to.lon.abs() * rad;

        let sin_dlat = ((lat1 - lat2) / two).sin();
        let sin_dlon = ((lon1 - lon2) / two).sin();
        let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
        let central_angle = two * h.sqrt().asin();

        let nautical_miles = central_angle * T::from_i32(180) * T::from_i32(60) / T::pi();
        nautical_miles * self.constants.units_per_nm
    }

    /// Latitude delta, in degrees, of moving `unit_offset` due north
    /// (negative: south).
    #[inline]
    pub fn offset_lat(&self, unit_offset: T) -> T {
        unit_offset / self.constants.range_partial
    }

    /// Longitude delta, in degrees, of moving `unit_offset` due east
    /// (negative: west) along latitude `lat`.
    ///
    /// # Errors
    ///
    /// [`GeoTileError::PoleSingularity`] when `lat` is ±90 and the offset is
    /// non-zero.
    pub fn offset_lon(&self, lat: T, unit_offset: T) -> Result<T> {
        if unit_offset == T::zero() {
            return Ok(T::zero());
        }
        let cos_lat = self.cos_lat(lat)?;
        checked_quotient(
            unit_offset / self.constants.range_partial,
            cos_lat,
            "longitude offset",
        )
    }

    /// Move a coordinate north/south, then east/west.
    ///
    /// The longitude delta is computed at the *new* latitude, so a grid of
    /// offsets built row by row stays consistent within each row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geotile::{Coordinate, GeometryEngine, Unit};
    ///
    /// let engine = GeometryEngine::<f64>::new(Unit::NauticalMiles);
    /// let origin = Coordinate::new(43.1553, -77.6090);
    ///
    /// assert_eq!(engine.offset(origin, 0.0, 0.0)?, origin);
    ///
    /// let moved = engine.offset(origin, 60.0, 0.0)?;
    /// assert!((moved.lat - 44.1553).abs() < 1e-12);
    /// # Ok::<(), geotile::GeoTileError>(())
    /// ```
    pub fn offset(
        &self,
        origin: Coordinate<T>,
        lat_unit_offset: T,
        lon_unit_offset: T,
    ) -> Result<Coordinate<T>> {
        let lat = origin.lat + self.offset_lat(lat_unit_offset);
        let lon = origin.lon + self.offset_lon(lat, lon_unit_offset)?;
        Ok(Coordinate::new(lat, lon))
    }

    /// Box of `width` × `height` engine units centered on `center`.
    ///
    /// The longitude half-span is computed once at the center latitude, so
    /// the box is slightly wider (in ground distance) on its edge nearer the
    /// equator than on the edge nearer the pole.
    pub fn rectangle(&self, center: Coordinate<T>, width: T, height: T) -> Result<BoundingBox<T>> {
        let two = T::two();
        let lat_range = self.offset_lat(height / two);
        let lon_range = self.offset_lon(center.lat, width / two)?;

        Ok(BoundingBox::new(
            center.lat + lat_range,
            center.lon + lon_range,
            center.lat - lat_range,
            center.lon - lon_range,
        ))
    }

    /// Square box with sides of `2 × radius` centered on `center`.
    pub fn bbox(&self, center: Coordinate<T>, radius: T) -> Result<BoundingBox<T>> {
        let side = T::two() * radius;
        self.rectangle(center, side, side)
    }

    /// Snap a coordinate to the center of the grid cell of size
    /// `2 × box_radius` that contains it.
    ///
    /// Rows are `2 × box_radius` tall everywhere; each row's cell width is
    /// derived from the row's snapped latitude, so every coordinate inside
    /// one cell yields the identical centerpoint. Snapping is idempotent.
    ///
    /// # Errors
    ///
    /// [`GeoTileError::InvalidInput`] for a non-positive or non-finite
    /// radius, [`GeoTileError::PoleSingularity`] if the snapped row sits on
    /// a pole.
    pub fn centerpoint_for(
        &self,
        coordinate: Coordinate<T>,
        box_radius: T,
    ) -> Result<Coordinate<T>> {
        ensure_positive("box radius", box_radius)?;

        let side = T::two() * box_radius;
        let half = T::half();

        let lat_width = self.offset_lat(side);
        let lat_cell = checked_quotient(coordinate.lat, lat_width, "latitude cell")?;
        let lat = (lat_cell.floor() + half) * lat_width;

        let row_span = self.cos_lat(lat)? * self.constants.range_partial;
        let lon_width = checked_quotient(side, row_span, "longitude cell width")?;
        let lon_cell = checked_quotient(coordinate.lon, lon_width, "longitude cell")?;
        let lon = (lon_cell.floor() + half) * lon_width;

        Ok(Coordinate::new(lat, lon))
    }

    /// Stable string key for a box, with every edge formatted to
    /// `coordinate_decimal_places`.
    ///
    /// ```rust
    /// use geotile::{BoundingBox, GeometryEngine, Unit};
    ///
    /// let engine = GeometryEngine::<f64>::new(Unit::Miles);
    /// let key = engine.cache_key(&BoundingBox::new(43.2, -77.5, 43.1, -77.7));
    /// assert_eq!(key, "43.2000000:-77.5000000:43.1000000:-77.7000000");
    /// ```
    pub fn cache_key(&self, bbox: &BoundingBox<T>) -> String {
        let places = self.config.coordinate_decimal_places as usize;
        format!(
            "{:.*}:{:.*}:{:.*}:{:.*}",
            places, bbox.north, places, bbox.east, places, bbox.south, places, bbox.west
        )
    }

    fn cos_lat(&self, lat: T) -> Result<T> {
        let cos_lat = (lat * self.constants.rad).cos();
        if lat.abs() == T::from_i32(90) || cos_lat == T::zero() {
            return Err(GeoTileError::PoleSingularity { lat: lat.to_f64() });
        }
        Ok(cos_lat)
    }
}

impl<T: Real> Default for GeometryEngine<T> {
    fn default() -> Self {
        Self::new(Unit::default())
    }
}

/// `numerator / denominator`, or `InvalidInput` when the quotient leaves
/// the scalar's range (radius too small for the numeric type, for example).
pub(crate) fn checked_quotient<T: Real>(numerator: T, denominator: T, what: &str) -> Result<T> {
    numerator.checked_div(denominator).ok_or_else(|| {
        GeoTileError::InvalidInput(format!(
            "{} is out of range: {} / {}",
            what, numerator, denominator
        ))
    })
}

pub(crate) fn ensure_positive<T: Real>(name: &str, value: T) -> Result<()> {
    if !value.is_finite() || value <= T::zero() {
        return Err(GeoTileError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, value
        )));
    }
    Ok(())
}
