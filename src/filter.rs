//! Lazy radius and rectangle filters over caller-owned collections.
//!
//! Points are anything implementing [`Located`], or arbitrary records paired
//! with an extractor closure via the `*_with` variants. Filters never
//! collect; they adapt the input iterator and yield matches in input order.

use crate::engine::GeometryEngine;
use crate::error::Result;
use geotile_types::coordinate::{Coordinate, Located};
use geotile_types::real::Real;

impl<T: Real> GeometryEngine<T> {
    /// Points strictly closer than `radius` to `center`.
    ///
    /// ```rust
    /// use geotile::{Coordinate, GeometryEngine, Unit};
    ///
    /// let engine = GeometryEngine::<f64>::new(Unit::Miles);
    /// let rochester = Coordinate::new(43.1553, -77.6090);
    /// let points = vec![(43.16, -77.61), (40.6333, -73.7833)];
    ///
    /// let near: Vec<_> = engine.filter_by_radius(points, rochester, 10.0).collect();
    /// assert_eq!(near, vec![(43.16, -77.61)]);
    /// ```
    pub fn filter_by_radius<I>(
        &self,
        points: I,
        center: Coordinate<T>,
        radius: T,
    ) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: Located<T>,
    {
        self.filter_by_radius_with(points, center, radius, |point: &I::Item| point.location())
    }

    /// Like [`filter_by_radius`](Self::filter_by_radius), reading each
    /// record's coordinate through `extractor`.
    pub fn filter_by_radius_with<I, F>(
        &self,
        points: I,
        center: Coordinate<T>,
        radius: T,
        extractor: F,
    ) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        F: Fn(&I::Item) -> Coordinate<T>,
    {
        points
            .into_iter()
            .filter(move |point| self.distance(center, extractor(point)) < radius)
    }

    /// Points inside the `width` × `height` rectangle around `center`.
    ///
    /// Latitude bounds are inclusive and longitude bounds exclusive, so a
    /// point on the shared edge of two side-by-side rectangles belongs to
    /// neither.
    ///
    /// # Errors
    ///
    /// Fails up front, before any point is read, when the rectangle cannot
    /// be built (center on a pole).
    pub fn filter_by_rectangle<I>(
        &self,
        points: I,
        center: Coordinate<T>,
        width: T,
        height: T,
    ) -> Result<impl Iterator<Item = I::Item>>
    where
        I: IntoIterator,
        I::Item: Located<T>,
    {
        self.filter_by_rectangle_with(points, center, width, height, |point: &I::Item| {
            point.location()
        })
    }

    /// Like [`filter_by_rectangle`](Self::filter_by_rectangle), reading each
    /// record's coordinate through `extractor`.
    pub fn filter_by_rectangle_with<I, F>(
        &self,
        points: I,
        center: Coordinate<T>,
        width: T,
        height: T,
        extractor: F,
    ) -> Result<impl Iterator<Item = I::Item>>
    where
        I: IntoIterator,
        F: Fn(&I::Item) -> Coordinate<T>,
    {
        let bounds = self.rectangle(center, width, height)?;
        Ok(points
            .into_iter()
            .filter(move |point| bounds.contains(&extractor(point))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoTileError;
    use geotile_types::unit::Unit;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Airport {
        code: &'static str,
        lat: f64,
        lon: f64,
    }

    fn airports() -> Vec<Airport> {
        vec![
            Airport { code: "ROC", lat: 43.1189, lon: -77.6724 },
            Airport { code: "BUF", lat: 42.9405, lon: -78.7322 },
            Airport { code: "SYR", lat: 43.1112, lon: -76.1063 },
            Airport { code: "JFK", lat: 40.6333, lon: -73.7833 },
        ]
    }

    fn rochester() -> Coordinate<f64> {
        Coordinate::new(43.1553, -77.6090)
    }

    fn codes<'a>(matches: impl Iterator<Item = &'a Airport>) -> Vec<&'static str> {
        matches.map(|a| a.code).collect()
    }

    #[test]
    fn test_filter_by_radius_with_extractor() {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let list = airports();

        let near = engine.filter_by_radius_with(&list, rochester(), 10.0, |a| {
            Coordinate::new(a.lat, a.lon)
        });
        assert_eq!(codes(near), vec!["ROC"]);

        let regional = engine.filter_by_radius_with(&list, rochester(), 100.0, |a| {
            Coordinate::new(a.lat, a.lon)
        });
        assert_eq!(codes(regional), vec!["ROC", "BUF", "SYR"]);
    }

    #[test]
    fn test_filter_by_radius_is_strict() {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let points = vec![rochester()];

        assert_eq!(engine.filter_by_radius(points.clone(), rochester(), 0.0).count(), 0);
        assert_eq!(engine.filter_by_radius(points, rochester(), 0.001).count(), 1);
    }

    #[test]
    fn test_filter_by_radius_is_lazy() {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let visited = Cell::new(0);
        let points = vec![rochester(); 10];

        let first = engine
            .filter_by_radius(
                points.iter().inspect(|_| visited.set(visited.get() + 1)),
                rochester(),
                1.0,
            )
            .next();

        assert!(first.is_some());
        assert_eq!(visited.get(), 1);
    }

    #[test]
    fn test_filter_by_rectangle() {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let list = airports();

        let inside = engine
            .filter_by_rectangle_with(&list, rochester(), 200.0, 40.0, |a| {
                Coordinate::new(a.lat, a.lon)
            })
            .unwrap();
        assert_eq!(codes(inside), vec!["ROC", "BUF", "SYR"]);

        let narrow = engine
            .filter_by_rectangle_with(&list, rochester(), 20.0, 20.0, |a| {
                Coordinate::new(a.lat, a.lon)
            })
            .unwrap();
        assert_eq!(codes(narrow), vec!["ROC"]);
    }

    #[test]
    fn test_filter_by_rectangle_tuples() {
        let engine = GeometryEngine::<f64>::new(Unit::NauticalMiles);
        let points = vec![(0.0, 0.0), (0.05, 0.0), (0.0, 0.05), (0.06, 0.0)];

        // Latitude edges are inclusive, longitude edges exclusive.
        let inside: Vec<_> = engine
            .filter_by_rectangle(points, Coordinate::new(0.0, 0.0), 6.0, 6.0)
            .unwrap()
            .collect();
        assert_eq!(inside, vec![(0.0, 0.0), (0.05, 0.0)]);
    }

    #[test]
    fn test_filter_by_rectangle_at_pole() {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let result = engine.filter_by_rectangle(
            Vec::<(f64, f64)>::new(),
            Coordinate::new(90.0, 0.0),
            1.0,
            1.0,
        );
        assert!(matches!(result, Err(GeoTileError::PoleSingularity { .. })));
    }
}
