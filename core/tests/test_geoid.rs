// core/tests/test_geoid.rs
use altigraph_core::geoid::{
    Egm2008CorrectionManager, StaticGeoidLookup, UnavailableGeoidLookup, GRID_RESOLUTION_DEG,
};
use altigraph_core::metrics::{geoid_cache_hit_total, geoid_cache_miss_total, Metrics};
use altigraph_core::models::TrackPoint;
use chrono::Utc;

fn make_point(lat: f64, lon: f64, altitude_m: f64) -> TrackPoint {
    let mut point = TrackPoint::new(Utc::now());
    point.latitude = Some(lat);
    point.longitude = Some(lon);
    point.altitude_m = Some(altitude_m);
    point
}

#[test]
fn test_correction_subtracts_undulation() {
    let mut manager = Egm2008CorrectionManager::new();
    let lookup = StaticGeoidLookup { undulation_m: 39.2 };
    let metrics = Metrics::new();

    // Oslo sentrum, ellipsoidehøyde 139.2 m → ortometrisk ~100 m
    let mut point = make_point(59.91, 10.75, 139.2);
    manager.correct_altitude(&lookup, &mut point, &metrics);

    let altitude = point.altitude_m.expect("høyde skal fortsatt finnes");
    assert!(
        (altitude - 100.0).abs() < 1e-9,
        "forventet ~100 m, fikk {altitude}"
    );
}

#[test]
fn test_cell_cache_reused_within_cell() {
    let mut manager = Egm2008CorrectionManager::new();
    let lookup = StaticGeoidLookup { undulation_m: 10.0 };
    let metrics = Metrics::new();

    let mut first = make_point(59.91, 10.75, 100.0);
    manager.correct_altitude(&lookup, &mut first, &metrics);
    assert_eq!(geoid_cache_miss_total(&metrics).get(), 1);
    assert_eq!(geoid_cache_hit_total(&metrics).get(), 0);

    // Innenfor samme rutenettcelle → gjenbruk
    let mut second = make_point(59.91 + GRID_RESOLUTION_DEG / 10.0, 10.75, 100.0);
    manager.correct_altitude(&lookup, &mut second, &metrics);
    assert_eq!(geoid_cache_miss_total(&metrics).get(), 1);
    assert_eq!(geoid_cache_hit_total(&metrics).get(), 1);

    // Nabocelle → nytt oppslag
    let mut third = make_point(59.91 + GRID_RESOLUTION_DEG * 2.0, 10.75, 100.0);
    manager.correct_altitude(&lookup, &mut third, &metrics);
    assert_eq!(geoid_cache_miss_total(&metrics).get(), 2);

    // tellerne er synlige i tekstformatet
    assert!(altigraph_core::metrics::gather().contains("geoid_cache"));
}

#[test]
fn test_lookup_failure_leaves_point_unchanged() {
    let mut manager = Egm2008CorrectionManager::new();
    let metrics = Metrics::new();

    let mut point = make_point(59.91, 10.75, 100.0);
    manager.correct_altitude(&UnavailableGeoidLookup, &mut point, &metrics);

    assert_eq!(point.altitude_m, Some(100.0), "feilet oppslag skal ikke røre punktet");
}

#[test]
fn test_point_without_location_or_altitude_is_noop() {
    let mut manager = Egm2008CorrectionManager::new();
    let lookup = StaticGeoidLookup { undulation_m: 10.0 };
    let metrics = Metrics::new();

    // bare høyde, ingen posisjon
    let mut no_location = TrackPoint::new(Utc::now());
    no_location.altitude_m = Some(100.0);
    manager.correct_altitude(&lookup, &mut no_location, &metrics);
    assert_eq!(no_location.altitude_m, Some(100.0));

    // posisjon, ingen høyde
    let mut no_altitude = TrackPoint::new(Utc::now());
    no_altitude.latitude = Some(59.91);
    no_altitude.longitude = Some(10.75);
    manager.correct_altitude(&lookup, &mut no_altitude, &metrics);
    assert_eq!(no_altitude.altitude_m, None);

    assert_eq!(geoid_cache_miss_total(&metrics).get(), 0, "ingen oppslag uten komplett punkt");
}
