//! # geotile-types
//!
//! Value types shared by the geotile engine and its callers:
//!
//! - **Numeric capability**: `Real`, implemented for `f64` and, with the
//!   `decimal` feature, for `rust_decimal::Decimal`
//! - **Coordinates**: `Coordinate<T>` and the `Located<T>` extractor trait
//! - **Boxes**: `BoundingBox<T>` in (north, east, south, west) order
//! - **Units**: `Unit` (miles, nautical miles, kilometers)
//!
//! All types are serializable with Serde and convert to the `geo` crate's
//! primitives when the scalar is `f64`.
//!
//! ## Examples
//!
//! ```rust
//! use geotile_types::bbox::BoundingBox;
//! use geotile_types::coordinate::Coordinate;
//!
//! let bbox = BoundingBox::new(43.2, -77.5, 43.1, -77.7);
//! assert!(bbox.contains(&Coordinate::new(43.1553, -77.6090)));
//!
//! let rect: geo::Rect<f64> = bbox.into();
//! assert_eq!(rect.min().x, -77.7);
//! ```

pub mod bbox;
pub mod coordinate;
pub mod real;
pub mod unit;
