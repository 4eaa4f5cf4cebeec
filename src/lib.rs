//! Spherical-earth offsets, distances and grid-aligned search-area tiling.
//!
//! ```rust
//! use geotile::{Coordinate, GeometryEngine, Unit};
//!
//! let engine = GeometryEngine::<f64>::new(Unit::Miles);
//! let rochester = Coordinate::new(43.1553, -77.6090);
//!
//! // Cover a 14 x 14 mile search area with boxes of radius 2 miles.
//! let boxes = engine.tile_boxes(rochester, 14.0, 14.0, 2.0)?;
//! assert_eq!(boxes.len(), 25);
//!
//! // Boxes snap to a global grid, so they can be cached and shared.
//! let key = engine.cache_key(&boxes[12]);
//! assert!(!key.is_empty());
//! # Ok::<(), geotile::GeoTileError>(())
//! ```
//!
//! With the default `decimal` feature, `GeometryEngine<rust_decimal::Decimal>`
//! performs the same computations in decimal arithmetic.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod tiling;

pub use builder::EngineBuilder;
pub use config::{Config, Constants};
pub use engine::GeometryEngine;
pub use error::{GeoTileError, Result};
pub use tiling::GridDimensions;

pub use geotile_types::bbox::BoundingBox;
pub use geotile_types::coordinate::{Coordinate, Located};
pub use geotile_types::real::Real;
pub use geotile_types::unit::{ParseUnitError, Unit};

pub use geo::{Point, Rect};

#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{EngineBuilder, GeoTileError, GeometryEngine, Result};

    pub use crate::{BoundingBox, Coordinate, GridDimensions, Located, Real, Unit};

    pub use crate::normalize::{clamp_lat, validate_coordinate, wrap_lon};

    pub use crate::Config;

    #[cfg(feature = "decimal")]
    pub use crate::Decimal;
}
