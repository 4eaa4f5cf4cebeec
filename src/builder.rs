//! Engine builder for flexible configuration
//!
//! Collects settings one at a time and validates them together when the
//! engine is built, so the numeric strategy can be picked at the last step.

use crate::config::Config;
use crate::engine::GeometryEngine;
use crate::error::Result;
use geotile_types::real::Real;
use geotile_types::unit::Unit;

/// Builder for [`GeometryEngine`] settings.
///
/// ```rust
/// use geotile::{EngineBuilder, Unit};
///
/// let engine = EngineBuilder::new()
///     .unit(Unit::Kilometers)
///     .coordinate_decimal_places(5)
///     .build::<f64>()?;
///
/// assert_eq!(engine.unit(), Unit::Kilometers);
/// # Ok::<(), geotile::GeoTileError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: Config,
}

impl EngineBuilder {
    /// Create a new builder with default settings (statute miles).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Replace every setting at once, e.g. with a config loaded from JSON.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn coordinate_decimal_places(mut self, places: u32) -> Self {
        self.config.coordinate_decimal_places = places;
        self
    }

    pub fn radius_decimal_places(mut self, places: u32) -> Self {
        self.config.radius_decimal_places = places;
        self
    }

    /// Warn when a single tiling request expands to more boxes than this.
    pub fn tile_warn_threshold(mut self, threshold: usize) -> Self {
        self.config.tile_warn_threshold = threshold;
        self
    }

    /// Reject tiling requests that expand to more boxes than this.
    pub fn max_tiles(mut self, max_tiles: usize) -> Self {
        self.config.max_tiles = max_tiles;
        self
    }

    /// Validate the settings and build an engine over scalar type `T`.
    pub fn build<T: Real>(self) -> Result<GeometryEngine<T>> {
        GeometryEngine::with_config(self.config)
    }
}
