//! Test fixtures for tripsheet.
//!
//! Backend payloads as the production API actually shapes them, plus a
//! small catalog of real routes from the Volovo district.

use serde_json::{Value, json};

use tripsheet::catalog::{RouteCatalog, decode_routes_response};

/// A `/api/routes` response with the usual mix of clean and messy rows.
pub fn routes_response() -> Value {
    json!({
        "routes": [
            {"name": "Волово — Тёплое", "road_width_m": 7, "road_length_km": 10, "pss_tonnage_t": 50},
            {"name": "Волово — Турдей", "road_width_m": 6, "road_length_km": "18,4", "pss_tonnage_t": "32,5"},
            {"name": "Объездная", "road_width_m": "узкая", "road_length_km": null, "pss_tonnage_t": 12},
        ]
    })
}

/// Catalog loaded from [`routes_response`].
pub fn loaded_catalog() -> RouteCatalog {
    let routes = decode_routes_response(&routes_response()).expect("fixture decodes");
    let mut catalog = RouteCatalog::new();
    catalog.replace_all(routes);
    catalog
}

/// GeoJSON trips as the newer backend revisions return them.
pub fn geojson_payload() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[37.888, 52.036], [37.90, 52.04], [37.92, 52.05]]
                },
                "properties": {"trip": 1}
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[37.92, 52.05], [37.95, 52.07]]
                },
                "properties": {"trip": 2}
            }
        ]
    })
}

/// The `trips_for_map` shape of the older backend.
pub fn trips_payload() -> Value {
    json!({
        "oid": 182,
        "trips": [
            {
                "i": 1,
                "points": [
                    {"lat": 52.036, "lon": 37.888, "tm": "2025-01-10 08:00:00"},
                    {"lat": 52.040, "lon": 37.900, "tm": "2025-01-10 08:05:00"},
                    {"lat": 52.050, "lon": 37.920, "tm": "2025-01-10 08:12:00"}
                ],
                "km_haversine": 2.9
            },
            {
                "i": 2,
                "coords": [[52.050, 37.920], [52.070, 37.950]]
            }
        ]
    })
}
