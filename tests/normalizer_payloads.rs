//! Normalizer tests over realistic backend payloads.

mod fixtures;

use serde_json::json;

use tripsheet::geometry::normalize_trip_payload;
use tripsheet::track::track_length_km;

#[test]
fn geojson_revision_normalizes_per_feature() {
    let result = normalize_trip_payload(&fixtures::geojson_payload()).unwrap();

    assert_eq!(result.polylines.len(), 2);
    assert_eq!(result.summary, "2 features");

    // lon-lat on the wire, lat-lon internally
    let first = result.polylines[0].points();
    assert_eq!(first[0], (52.036, 37.888));
    assert_eq!(first.len(), 3);
}

#[test]
fn trips_revision_normalizes_both_field_styles() {
    let result = normalize_trip_payload(&fixtures::trips_payload()).unwrap();

    assert_eq!(result.polylines.len(), 2);
    assert_eq!(result.summary, "2 trips");

    // the points-style trip keeps backend order
    assert_eq!(result.polylines[0].points()[0], (52.036, 37.888));
    // the coords-style trip is already lat-lon
    assert_eq!(result.polylines[1].points()[1], (52.07, 37.95));
}

#[test]
fn normalized_polylines_have_a_measurable_length() {
    let result = normalize_trip_payload(&fixtures::trips_payload()).unwrap();
    for polyline in &result.polylines {
        assert!(track_length_km(polyline.points()) > 0.0);
    }
}

#[test]
fn degenerate_winner_does_not_fall_through() {
    // trips is present and non-empty, so the points branch must never
    // run even though trips yields nothing renderable
    let payload = json!({
        "trips": [{"coords": [[52.0, 37.9]]}],
        "points": [
            {"lat": 52.0, "lon": 37.9},
            {"lat": 52.01, "lon": 37.91}
        ]
    });
    let result = normalize_trip_payload(&payload).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.summary, "no routes found");
}

#[test]
fn empty_payloads_are_explicitly_empty() {
    for payload in [
        json!({}),
        json!([]),
        json!({"type": "FeatureCollection", "features": []}),
        json!({"trips": []}),
        json!({"points": []}),
    ] {
        let result = normalize_trip_payload(&payload).unwrap();
        assert!(result.is_empty(), "expected empty for {payload}");
        assert_eq!(result.summary, "no routes found");
    }
}

#[test]
fn scalar_payloads_fail_fast() {
    assert!(normalize_trip_payload(&json!("<html>login</html>")).is_err());
    assert!(normalize_trip_payload(&json!(false)).is_err());
}
