//! Covering a search area with grid-aligned boxes.
//!
//! A search rectangle (width × height around a center) is covered by boxes
//! of a fixed radius. Every box is snapped to the global grid defined by
//! [`GeometryEngine::centerpoint_for`], so two nearby searches with the same
//! box radius share identical boxes wherever they overlap. That lets a
//! caller cache per-box results and reuse them across queries.

use crate::engine::{GeometryEngine, checked_quotient, ensure_positive};
use crate::error::{GeoTileError, Result};
use geotile_types::bbox::BoundingBox;
use geotile_types::coordinate::Coordinate;
use geotile_types::real::Real;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Shape of a tiling grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Boxes per row (west to east), always odd
    pub columns: usize,
    /// Rows (south to north), always odd
    pub rows: usize,
}

impl GridDimensions {
    /// Total number of boxes.
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major index of the box in `row` (from the south) and `column`
    /// (from the west).
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Index of the box that holds the search center.
    pub fn center_index(&self) -> usize {
        self.index(self.rows / 2, self.columns / 2)
    }
}

impl<T: Real> GeometryEngine<T> {
    /// Grid shape needed to cover a `width` × `height` search area with
    /// boxes of radius `max_box_radius`.
    ///
    /// Each axis gets `2 × ceil((extent / 2 − r) / 2r) + 1` boxes, or a
    /// single box when the area already fits inside one.
    pub fn tile_dimensions(
        &self,
        width: T,
        height: T,
        max_box_radius: T,
    ) -> Result<GridDimensions> {
        ensure_positive("max box radius", max_box_radius)?;
        ensure_extent("width", width)?;
        ensure_extent("height", height)?;

        let wh = T::two() * max_box_radius;
        let columns = 2 * axis_steps(width, max_box_radius, wh)? + 1;
        let rows = 2 * axis_steps(height, max_box_radius, wh)? + 1;

        if columns.checked_mul(rows).is_none() {
            return Err(GeoTileError::InvalidInput(format!(
                "Tiling grid of {} x {} boxes is too large",
                columns, rows
            )));
        }

        Ok(GridDimensions { columns, rows })
    }

    /// Number of boxes [`tile_offsets`](Self::tile_offsets) yields for the
    /// same arguments, without computing them.
    pub fn tile_offsets_count(
        &self,
        center: Coordinate<T>,
        width: T,
        height: T,
        max_box_radius: T,
    ) -> Result<usize> {
        ensure_center(&center)?;
        Ok(self.tile_dimensions(width, height, max_box_radius)?.len())
    }

    /// Grid-snapped centerpoints of the boxes covering the search area.
    ///
    /// Points are ordered row by row from south to north, and west to east
    /// within a row; use [`GridDimensions::index`] to address them.
    ///
    /// # Errors
    ///
    /// [`GeoTileError::InvalidInput`] for invalid sizes or a non-finite
    /// center, and when the grid would hold more than
    /// [`Config::max_tiles`](crate::Config::max_tiles) boxes.
    /// [`GeoTileError::PoleSingularity`] for a center on a pole.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geotile::{Coordinate, GeometryEngine, Unit};
    ///
    /// let engine = GeometryEngine::<f64>::new(Unit::Miles);
    /// let rochester = Coordinate::new(43.1553, -77.6090);
    ///
    /// let centers = engine.tile_offsets(rochester, 7.0, 7.0, 2.0)?;
    /// assert_eq!(centers.len(), 9);
    /// assert_eq!(centers.len(), engine.tile_offsets_count(rochester, 7.0, 7.0, 2.0)?);
    /// # Ok::<(), geotile::GeoTileError>(())
    /// ```
    pub fn tile_offsets(
        &self,
        center: Coordinate<T>,
        width: T,
        height: T,
        max_box_radius: T,
    ) -> Result<Vec<Coordinate<T>>> {
        ensure_center(&center)?;
        let dims = self.tile_dimensions(width, height, max_box_radius)?;
        let wh = T::two() * max_box_radius;
        let places = self.config().radius_decimal_places as usize;

        log::debug!(
            "Tiling {}x{} {} area with radius {:.*}: {} columns x {} rows",
            width,
            height,
            self.unit(),
            places,
            max_box_radius,
            dims.columns,
            dims.rows
        );

        if dims.len() > self.config().max_tiles {
            return Err(GeoTileError::InvalidInput(format!(
                "Tiling request expands to {} boxes, above the limit of {} (radius {:.*})",
                dims.len(),
                self.config().max_tiles,
                places,
                max_box_radius
            )));
        }
        if dims.len() > self.config().tile_warn_threshold {
            log::warn!(
                "Tiling request expands to {} boxes (threshold {}) at radius {:.*}",
                dims.len(),
                self.config().tile_warn_threshold,
                places,
                max_box_radius
            );
        }

        // Snap first so a center lying on a grid line cannot land two
        // offsets in the same cell.
        let origin = self.centerpoint_for(center, max_box_radius)?;

        let lat_offsets = axis_offsets::<T>(dims.rows / 2, wh)?;
        let lon_offsets = axis_offsets::<T>(dims.columns / 2, wh)?;
        self.warn_if_rows_leave_range(origin, &lat_offsets);

        iproduct!(lat_offsets.iter().copied(), lon_offsets.iter().copied())
            .map(|(lat_offset, lon_offset)| {
                let shifted = self.offset(origin, lat_offset, lon_offset)?;
                self.centerpoint_for(shifted, max_box_radius)
            })
            .collect()
    }

    /// Boxes of radius `max_box_radius` around every point of
    /// [`tile_offsets`](Self::tile_offsets), in the same order.
    pub fn tile_boxes(
        &self,
        center: Coordinate<T>,
        width: T,
        height: T,
        max_box_radius: T,
    ) -> Result<Vec<BoundingBox<T>>> {
        self.tile_offsets(center, width, height, max_box_radius)?
            .into_iter()
            .map(|point| self.bbox(point, max_box_radius))
            .collect()
    }

    fn warn_if_rows_leave_range(&self, origin: Coordinate<T>, lat_offsets: &[T]) {
        let ninety = T::from_i32(90);
        let (Some(&south), Some(&north)) = (lat_offsets.first(), lat_offsets.last()) else {
            return;
        };
        let south = origin.lat + self.offset_lat(south);
        let north = origin.lat + self.offset_lat(north);
        if north > ninety || south < -ninety {
            log::warn!("Tile rows span latitudes {} to {}, beyond the poles", south, north);
        }
    }
}

/// Number of boxes needed on each side of the center along one axis.
fn axis_steps<T: Real>(extent: T, radius: T, wh: T) -> Result<usize> {
    let needed = extent / T::two() - radius;
    if needed <= T::zero() {
        return Ok(0);
    }
    checked_quotient(needed, wh, "tiling steps")?
        .ceil()
        .to_i64()
        .and_then(|steps| i32::try_from(steps).ok())
        .and_then(|steps| usize::try_from(steps).ok())
        .ok_or_else(|| {
            GeoTileError::InvalidInput(format!(
                "Search extent {} is too large for box radius {}",
                extent, radius
            ))
        })
}

/// `k × wh` for `k` in `-steps..=steps`, ascending.
fn axis_offsets<T: Real>(steps: usize, wh: T) -> Result<Vec<T>> {
    let steps = i32::try_from(steps)
        .map_err(|_| GeoTileError::InvalidInput(format!("Too many tiling steps: {}", steps)))?;
    Ok((-steps..=steps).map(|k| T::from_i32(k) * wh).collect())
}

fn ensure_extent<T: Real>(name: &str, value: T) -> Result<()> {
    if !value.is_finite() || value < T::zero() {
        return Err(GeoTileError::InvalidInput(format!(
            "Search {} must be non-negative and finite, got {}",
            name, value
        )));
    }
    Ok(())
}

fn ensure_center<T: Real>(center: &Coordinate<T>) -> Result<()> {
    if !center.is_finite() {
        return Err(GeoTileError::InvalidInput(format!(
            "Search center must be finite, got ({}, {})",
            center.lat, center.lon
        )));
    }
    if center.lat.abs() == T::from_i32(90) {
        return Err(GeoTileError::PoleSingularity {
            lat: center.lat.to_f64(),
        });
    }
    Ok(())
}
