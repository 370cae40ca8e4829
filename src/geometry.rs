//! Trip geometry normalizer.
//!
//! The backend has shipped trip geometry in several incompatible shapes
//! over time: a GeoJSON FeatureCollection, a list of trip records (with
//! either `coords` pairs or `points` objects), or a flat `points` array.
//! This module resolves the shape once, in fixed priority order, and
//! turns whichever matched into plain polylines for the map layer.
//!
//! The first matching non-empty shape wins outright; later shapes are
//! never consulted, even when the winner turns out to be degenerate.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::numeric::parse_float;
use crate::polyline::Polyline;

/// Raised only when the payload is not a JSON container at all; every
/// lesser malformation degrades to an empty result instead.
#[derive(Debug, Error)]
pub enum TripPayloadError {
    #[error("trip payload must be a JSON object or array, got {0}")]
    NotAContainer(&'static str),
}

/// Normalizer output: zero or more renderable polylines plus a label for
/// the summary line above the map.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTrips {
    pub polylines: Vec<Polyline>,
    pub summary: String,
}

impl NormalizedTrips {
    /// The explicit empty result.
    pub fn empty() -> Self {
        Self {
            polylines: Vec::new(),
            summary: "no routes found".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }
}

/// Recognized payload shapes, in resolution priority order.
#[derive(Debug)]
enum PayloadShape<'a> {
    FeatureCollection(&'a [Value]),
    TripList(&'a [Value]),
    PointList(&'a [Value]),
    Unrecognized,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const NO_FEATURES: &[Value] = &[];

fn detect(payload: &Value) -> Result<PayloadShape<'_>, TripPayloadError> {
    if let Some(obj) = payload.as_object() {
        if obj.get("type").and_then(Value::as_str) == Some("FeatureCollection") {
            let features = obj
                .get("features")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(NO_FEATURES);
            return Ok(PayloadShape::FeatureCollection(features));
        }
        if let Some(trips) = obj.get("trips").and_then(Value::as_array) {
            if !trips.is_empty() {
                return Ok(PayloadShape::TripList(trips));
            }
        }
        if let Some(points) = obj.get("points").and_then(Value::as_array) {
            if !points.is_empty() {
                return Ok(PayloadShape::PointList(points));
            }
        }
        return Ok(PayloadShape::Unrecognized);
    }
    if let Some(trips) = payload.as_array() {
        return Ok(PayloadShape::TripList(trips));
    }
    Err(TripPayloadError::NotAContainer(json_type_name(payload)))
}

/// Normalizes one backend trip payload into renderable polylines.
///
/// Returns the explicit empty result for recognized-but-degenerate
/// payloads; errors only when the payload is not an object or array.
pub fn normalize_trip_payload(payload: &Value) -> Result<NormalizedTrips, TripPayloadError> {
    let shape = detect(payload)?;
    let result = match shape {
        PayloadShape::FeatureCollection(features) => {
            debug!(features = features.len(), "payload resolved as GeoJSON");
            normalize_feature_collection(features)
        }
        PayloadShape::TripList(trips) => {
            debug!(trips = trips.len(), "payload resolved as trip list");
            normalize_trip_list(trips)
        }
        PayloadShape::PointList(points) => {
            debug!(points = points.len(), "payload resolved as point list");
            normalize_point_list(points)
        }
        PayloadShape::Unrecognized => NormalizedTrips::empty(),
    };
    Ok(result)
}

/// A coordinate pair survives only if both components parse to finite
/// numbers. Invalid pairs are dropped, never defaulted or interpolated.
fn parse_pair(first: &Value, second: &Value) -> Option<(f64, f64)> {
    Some((parse_float(first)?, parse_float(second)?))
}

/// `[[lat, lon], ...]` pair arrays (the trip `coords` field).
fn pairs_from_arrays(items: &[Value]) -> Vec<(f64, f64)> {
    items
        .iter()
        .filter_map(|item| {
            let pair = item.as_array()?;
            parse_pair(pair.first()?, pair.get(1)?)
        })
        .collect()
}

/// `[{lat, lon}, ...]` point objects.
fn pairs_from_objects(items: &[Value]) -> Vec<(f64, f64)> {
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            parse_pair(obj.get("lat")?, obj.get("lon")?)
        })
        .collect()
}

/// GeoJSON stores lon-lat; internal convention is lat-lon.
fn pairs_from_geojson(coordinates: &[Value]) -> Vec<(f64, f64)> {
    coordinates
        .iter()
        .filter_map(|item| {
            let pair = item.as_array()?;
            let (lon, lat) = parse_pair(pair.first()?, pair.get(1)?)?;
            Some((lat, lon))
        })
        .collect()
}

fn normalize_feature_collection(features: &[Value]) -> NormalizedTrips {
    let mut polylines = Vec::new();
    for feature in features {
        let Some(geometry) = feature.get("geometry") else {
            continue;
        };
        let Some(coordinates) = geometry.get("coordinates").and_then(Value::as_array) else {
            continue;
        };
        match geometry.get("type").and_then(Value::as_str) {
            Some("LineString" | "MultiPoint") => {
                push_renderable(&mut polylines, pairs_from_geojson(coordinates));
            }
            Some("MultiLineString") => {
                for line in coordinates.iter().filter_map(Value::as_array) {
                    push_renderable(&mut polylines, pairs_from_geojson(line));
                }
            }
            _ => {}
        }
    }
    finish(polylines, count_label(features.len(), "feature"))
}

fn normalize_trip_list(trips: &[Value]) -> NormalizedTrips {
    let mut polylines = Vec::new();
    for trip in trips {
        push_renderable(&mut polylines, trip_points(trip));
    }
    let label = count_label(polylines.len(), "trip");
    finish(polylines, label)
}

/// Geometry of one trip record: the `coords` pair array wins when it
/// yields anything at all, otherwise the `points` object array is tried.
fn trip_points(trip: &Value) -> Vec<(f64, f64)> {
    if let Some(coords) = trip.get("coords").and_then(Value::as_array) {
        let points = pairs_from_arrays(coords);
        if !points.is_empty() {
            return points;
        }
    }
    if let Some(points) = trip.get("points").and_then(Value::as_array) {
        return pairs_from_objects(points);
    }
    Vec::new()
}

fn normalize_point_list(points: &[Value]) -> NormalizedTrips {
    let pairs = pairs_from_objects(points);
    let label = count_label(pairs.len(), "point");
    let mut polylines = Vec::new();
    push_renderable(&mut polylines, pairs);
    finish(polylines, label)
}

fn push_renderable(polylines: &mut Vec<Polyline>, points: Vec<(f64, f64)>) {
    let polyline = Polyline::new(points);
    if polyline.is_renderable() {
        polylines.push(polyline);
    }
}

fn finish(polylines: Vec<Polyline>, summary: String) -> NormalizedTrips {
    if polylines.is_empty() {
        NormalizedTrips::empty()
    } else {
        NormalizedTrips { polylines, summary }
    }
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
