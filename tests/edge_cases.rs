use geotile::normalize::{clamp_lat, validate_coordinate, wrap_lon};
use geotile::{Config, Coordinate, EngineBuilder, GeoTileError, GeometryEngine, Unit};

/// Test 1: Longitude spans at the poles
#[test]
fn test_pole_operations() {
    let engine = GeometryEngine::<f64>::new(Unit::Miles);
    let north_pole = Coordinate::new(90.0, 0.0);
    let south_pole = Coordinate::new(-90.0, 45.0);

    assert!(matches!(
        engine.offset_lon(90.0, 1.0),
        Err(GeoTileError::PoleSingularity { .. })
    ));
    assert_eq!(engine.offset_lon(90.0, 0.0).unwrap(), 0.0);

    assert!(engine.rectangle(north_pole, 2.0, 2.0).is_err());
    assert!(engine.bbox(south_pole, 2.0).is_err());
    assert!(engine.tile_boxes(north_pole, 10.0, 10.0, 2.0).is_err());

    // Latitude-only moves and distances stay defined.
    let moved = engine.offset(north_pole, -69.04674, 0.0).unwrap();
    assert!((moved.lat - 89.0).abs() < 1e-9);
    assert!(engine.distance(north_pole, south_pole) > 0.0);
}

/// Test 2: Near, but not at, a pole
#[test]
fn test_near_pole_operations() {
    let engine = GeometryEngine::<f64>::new(Unit::NauticalMiles);
    let center = Coordinate::new(89.0, 10.0);

    let bbox = engine.bbox(center, 1.0).unwrap();
    assert!(bbox.width() > bbox.height() * 50.0);

    let boxes = engine.tile_boxes(center, 6.0, 6.0, 1.0).unwrap();
    assert_eq!(boxes.len(), 9);
}

/// Test 3: Degenerate radii and extents
#[test]
fn test_degenerate_sizes() {
    let engine = GeometryEngine::<f64>::new(Unit::Miles);
    let center = Coordinate::new(43.1553, -77.6090);

    let point_box = engine.bbox(center, 0.0).unwrap();
    assert_eq!(point_box.to_tuple(), (center.lat, center.lon, center.lat, center.lon));

    assert!(matches!(
        engine.tile_offsets(center, 10.0, 10.0, 0.0),
        Err(GeoTileError::InvalidInput(_))
    ));
    assert!(engine.tile_offsets(center, 10.0, 10.0, -2.0).is_err());
    assert!(engine.tile_offsets_count(center, 10.0, 10.0, f64::NAN).is_err());
    assert!(engine.centerpoint_for(center, 0.0).is_err());

    let single = engine.tile_boxes(center, 0.0, 0.0, 2.0).unwrap();
    assert_eq!(single.len(), 1);
    assert!(single[0].contains(&center));
}

/// Test 4: Caller-side normalization helpers
#[test]
fn test_normalization_helpers() {
    assert_eq!(wrap_lon(180.0001), -179.9999);
    assert_eq!(wrap_lon(-180.0001), 179.9999);
    assert_eq!(clamp_lat(91.0), 90.0);
    assert_eq!(clamp_lat(-91.0), -90.0);

    let raw = Coordinate::new(92.0, 181.0);
    assert!(validate_coordinate(&raw).is_err());

    let fixed = Coordinate::new(clamp_lat(raw.lat), wrap_lon(raw.lon));
    assert!(validate_coordinate(&fixed).is_ok());
    assert_eq!(fixed.lat, 90.0);
    assert_eq!(fixed.lon, -179.0);
}

/// Test 5: Configuration loading and validation
#[test]
fn test_config_loading() {
    let config = Config::from_json(
        r#"{
            "unit": "kilometers",
            "coordinate_decimal_places": 4,
            "tile_warn_threshold": 100
        }"#,
    )
    .unwrap();

    let engine = EngineBuilder::new().config(config).build::<f64>().unwrap();
    assert_eq!(engine.unit(), Unit::Kilometers);
    assert_eq!(engine.config().radius_decimal_places, 3);

    let bbox = engine.bbox(Coordinate::new(0.0, 0.0), 1.0).unwrap();
    let key = engine.cache_key(&bbox);
    assert_eq!(key.split(':').count(), 4);
    assert!(key.split(':').all(|part| part.split('.').nth(1).map(str::len) == Some(4)));

    assert!(matches!(
        Config::from_json(r#"{"tile_warn_threshold": 0}"#),
        Err(GeoTileError::InvalidConfig(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{"unit": "furlongs"}"#),
        Err(GeoTileError::Serialization(_))
    ));
}

/// Test 6: Engines are shareable across threads
#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GeometryEngine<f64>>();
    #[cfg(feature = "decimal")]
    assert_send_sync::<GeometryEngine<rust_decimal::Decimal>>();

    let engine = std::sync::Arc::new(GeometryEngine::<f64>::new(Unit::Miles));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let center = Coordinate::new(40.0 + i as f64, -74.0);
                engine.tile_boxes(center, 14.0, 14.0, 2.0).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 25);
    }
}
