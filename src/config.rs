//! Engine configuration and unit conversion constants.
//!
//! [`Config`] holds the user-facing, serializable settings. [`Constants`]
//! holds the conversion factors in the engine's scalar type, derived once
//! from the configured unit.

use crate::error::{GeoTileError, Result};
use geotile_types::real::Real;
use geotile_types::unit::Unit;
use serde::{Deserialize, Serialize};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub unit: Unit,

    /// Decimal places used when formatting box cache keys. Geometry itself
    /// is never rounded.
    #[serde(default = "Config::default_coordinate_decimal_places")]
    pub coordinate_decimal_places: u32,

    /// Decimal places radii are reported with in diagnostics
    #[serde(default = "Config::default_radius_decimal_places")]
    pub radius_decimal_places: u32,

    /// Tiling requests expanding to more boxes than this are logged as warnings
    #[serde(default = "Config::default_tile_warn_threshold")]
    pub tile_warn_threshold: usize,

    /// Tiling requests expanding to more boxes than this are rejected
    /// before any box is generated
    #[serde(default = "Config::default_max_tiles")]
    pub max_tiles: usize,
}

impl Config {
    /// Upper bound for both decimal place settings (decimal scale limit).
    pub const MAX_DECIMAL_PLACES: u32 = 28;

    const fn default_coordinate_decimal_places() -> u32 {
        7
    }

    const fn default_radius_decimal_places() -> u32 {
        3
    }

    const fn default_tile_warn_threshold() -> usize {
        10_000
    }

    const fn default_max_tiles() -> usize {
        1_000_000
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_coordinate_decimal_places(mut self, places: u32) -> Self {
        self.coordinate_decimal_places = places;
        self
    }

    pub fn with_radius_decimal_places(mut self, places: u32) -> Self {
        self.radius_decimal_places = places;
        self
    }

    pub fn with_tile_warn_threshold(mut self, threshold: usize) -> Self {
        assert!(threshold > 0, "Tile warn threshold must be greater than zero");
        self.tile_warn_threshold = threshold;
        self
    }

    pub fn with_max_tiles(mut self, max_tiles: usize) -> Self {
        assert!(max_tiles > 0, "Max tiles must be greater than zero");
        self.max_tiles = max_tiles;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.coordinate_decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(format!(
                "Coordinate decimal places must be at most {}, got {}",
                Self::MAX_DECIMAL_PLACES,
                self.coordinate_decimal_places
            ));
        }

        if self.radius_decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(format!(
                "Radius decimal places must be at most {}, got {}",
                Self::MAX_DECIMAL_PLACES,
                self.radius_decimal_places
            ));
        }

        if self.tile_warn_threshold == 0 {
            return Err("Tile warn threshold must be greater than zero".to_string());
        }

        if self.max_tiles == 0 {
            return Err("Max tiles must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate().map_err(GeoTileError::InvalidConfig)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| GeoTileError::Toml(e.to_string()))?;
        config.validate().map_err(GeoTileError::InvalidConfig)?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GeoTileError::Toml(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            coordinate_decimal_places: Self::default_coordinate_decimal_places(),
            radius_decimal_places: Self::default_radius_decimal_places(),
            tile_warn_threshold: Self::default_tile_warn_threshold(),
            max_tiles: Self::default_max_tiles(),
        }
    }
}

/// Unit conversion constants in the engine's scalar type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants<T> {
    /// Kilometers per statute mile (1.609344)
    pub km_per_mi: T,
    /// Statute miles per nautical mile (1.150779)
    pub mi_per_nm: T,
    /// Nautical miles per degree of latitude (60.00721)
    pub nm_per_lat: T,
    /// Nautical miles per degree of longitude at the equator (60.10793)
    pub nm_per_lon: T,
    /// Engine units per nautical mile
    pub units_per_nm: T,
    /// Engine units per degree of latitude: `units_per_nm × 60`
    pub range_partial: T,
    /// Radians per degree
    pub rad: T,
}

impl<T: Real> Constants<T> {
    pub fn for_unit(unit: Unit) -> Self {
        let km_per_mi = T::from_scaled(1_609_344, 6);
        let mi_per_nm = T::from_scaled(1_150_779, 6);
        let nm_per_lat = T::from_scaled(6_000_721, 5);
        let nm_per_lon = T::from_scaled(6_010_793, 5);

        let units_per_nm = match unit {
            Unit::NauticalMiles => T::from_i32(1),
            Unit::Miles => mi_per_nm,
            Unit::Kilometers => mi_per_nm * km_per_mi,
        };

        Self {
            km_per_mi,
            mi_per_nm,
            nm_per_lat,
            nm_per_lon,
            units_per_nm,
            range_partial: units_per_nm * T::from_i32(60),
            rad: T::pi() / T::from_i32(180),
        }
    }
}
