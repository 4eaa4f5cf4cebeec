use geotile::{Coordinate, GeometryEngine, Unit};
use proptest::prelude::*;

fn unit_strategy() -> impl Strategy<Value = Unit> {
    prop_oneof![
        Just(Unit::Miles),
        Just(Unit::NauticalMiles),
        Just(Unit::Kilometers),
    ]
}

proptest! {
    #[test]
    fn prop_offset_identity(
        lat in -89.0..89.0_f64,
        lon in -179.0..179.0_f64,
        unit in unit_strategy()
    ) {
        let engine = GeometryEngine::<f64>::new(unit);
        let origin = Coordinate::new(lat, lon);
        prop_assert_eq!(engine.offset(origin, 0.0, 0.0).unwrap(), origin);
    }

    #[test]
    fn prop_offset_monotonic(
        lat in -70.0..70.0_f64,
        lon in -170.0..170.0_f64,
        distance in 0.01..50.0_f64,
        unit in unit_strategy()
    ) {
        let engine = GeometryEngine::<f64>::new(unit);
        let origin = Coordinate::new(lat, lon);

        let up = engine.offset(origin, distance, distance).unwrap();
        prop_assert!(up.lat > origin.lat && up.lon > origin.lon);

        let down = engine.offset(origin, -distance, -distance).unwrap();
        prop_assert!(down.lat < origin.lat && down.lon < origin.lon);
    }

    #[test]
    fn prop_offset_round_trip(
        lat in -60.0..60.0_f64,
        lon in -170.0..170.0_f64,
        distance in 0.0..5.0_f64,
        unit in unit_strategy()
    ) {
        let engine = GeometryEngine::<f64>::new(unit);
        let origin = Coordinate::new(lat, lon);

        let there = engine.offset(origin, -distance, -distance).unwrap();
        let back = engine.offset(there, distance, distance).unwrap();

        prop_assert!((back.lat - origin.lat).abs() < 1e-3);
        prop_assert!(
            (back.lon - origin.lon).abs() < 1e-3,
            "lon {} -> {} (diff {})", origin.lon, back.lon, (back.lon - origin.lon).abs()
        );
    }

    #[test]
    fn prop_distance_symmetric(
        lat1 in -89.0..89.0_f64,
        lon1 in -179.0..179.0_f64,
        lat2 in -89.0..89.0_f64,
        lon2 in -179.0..179.0_f64
    ) {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let a = Coordinate::new(lat1, lon1);
        let b = Coordinate::new(lat2, lon2);

        let ab = engine.distance(a, b);
        let ba = engine.distance(b, a);
        prop_assert!(ab >= 0.0);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_centerpoint_idempotent(
        lat in -70.0..70.0_f64,
        lon in -170.0..170.0_f64,
        radius in 0.5..20.0_f64,
        unit in unit_strategy()
    ) {
        let engine = GeometryEngine::<f64>::new(unit);
        let once = engine.centerpoint_for(Coordinate::new(lat, lon), radius).unwrap();
        let twice = engine.centerpoint_for(once, radius).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_tile_count_matches_offsets(
        lat in -70.0..70.0_f64,
        lon in -170.0..170.0_f64,
        width in 0.1..100.0_f64,
        height in 0.1..100.0_f64,
        radius in 0.5..20.0_f64
    ) {
        let engine = GeometryEngine::<f64>::new(Unit::Miles);
        let center = Coordinate::new(lat, lon);

        let count = engine.tile_offsets_count(center, width, height, radius).unwrap();
        let offsets = engine.tile_offsets(center, width, height, radius).unwrap();
        prop_assert_eq!(count, offsets.len());

        let dims = engine.tile_dimensions(width, height, radius).unwrap();
        prop_assert_eq!(dims.columns % 2, 1);
        prop_assert_eq!(dims.rows % 2, 1);
    }

    #[test]
    fn prop_tiles_are_adjacent(
        lat in -70.0..70.0_f64,
        lon in -170.0..170.0_f64,
        width in 0.1..40.0_f64,
        height in 0.1..40.0_f64,
        radius in 0.5..20.0_f64
    ) {
        let engine = GeometryEngine::<f64>::new(Unit::NauticalMiles);
        let center = Coordinate::new(lat, lon);

        let dims = engine.tile_dimensions(width, height, radius).unwrap();
        let boxes = engine.tile_boxes(center, width, height, radius).unwrap();

        for row in 0..dims.rows {
            for column in 0..dims.columns {
                let current = boxes[dims.index(row, column)];
                if column + 1 < dims.columns {
                    let east = boxes[dims.index(row, column + 1)];
                    prop_assert!((current.east - east.west).abs() < 1e-9);
                }
                if row + 1 < dims.rows {
                    let north = boxes[dims.index(row + 1, column)];
                    prop_assert!((current.north - north.south).abs() < 1e-9);
                }
            }
        }
    }
}
