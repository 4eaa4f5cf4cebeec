//! Caller-side coordinate normalization and validation.
//!
//! The engine never normalizes its inputs; these helpers are for callers
//! who accept raw coordinates and want them in range first.

use crate::error::{GeoTileError, Result};
use geotile_types::coordinate::Coordinate;
use geotile_types::real::Real;

/// Clamp a latitude to [-90, 90].
pub fn clamp_lat<T: Real>(lat: T) -> T {
    let ninety = T::from_i32(90);
    if lat > ninety {
        ninety
    } else if lat < -ninety {
        -ninety
    } else {
        lat
    }
}

/// Bring a longitude just past the antimeridian back into [-180, 180].
///
/// Values above 180 are shifted by -360 and values below -180 by +360,
/// once. In-range values are returned unchanged.
///
/// ```
/// use geotile::normalize::wrap_lon;
///
/// assert!((wrap_lon(180.5_f64) - -179.5).abs() < 1e-12);
/// assert_eq!(wrap_lon(-77.6), -77.6);
/// ```
pub fn wrap_lon<T: Real>(lon: T) -> T {
    let half_turn = T::from_i32(180);
    let full_turn = T::from_i32(360);
    if lon > half_turn {
        lon - full_turn
    } else if lon < -half_turn {
        lon + full_turn
    } else {
        lon
    }
}

/// Validates a coordinate has a finite latitude in [-90, 90] and a finite
/// longitude in [-180, 180].
///
/// # Examples
///
/// ```
/// use geotile::normalize::validate_coordinate;
/// use geotile::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, -74.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(40.0, 200.0)).is_err());
/// ```
pub fn validate_coordinate<T: Real>(coordinate: &Coordinate<T>) -> Result<()> {
    let Coordinate { lat, lon } = *coordinate;

    if !lat.is_finite() {
        return Err(GeoTileError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(GeoTileError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if clamp_lat(lat) != lat {
        return Err(GeoTileError::InvalidInput(format!(
            "Latitude out of range [-90, 90]: {}",
            lat
        )));
    }

    let half_turn = T::from_i32(180);
    if lon > half_turn || lon < -half_turn {
        return Err(GeoTileError::InvalidInput(format!(
            "Longitude out of range [-180, 180]: {}",
            lon
        )));
    }

    Ok(())
}
