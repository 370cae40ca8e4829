//! GPS track utilities: odometer distance, jump filtering, downsampling.
//!
//! Raw tracker windows can run to half a million points and carry the
//! usual GPS noise (teleporting fixes, implausible speeds). The trip
//! detector upstream consumes cleaned tracks; these helpers do the
//! cleaning and the distance bookkeeping.

use chrono::NaiveDateTime;
use rayon::prelude::*;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Track length above which the leg sum goes parallel.
const PAR_THRESHOLD: usize = 10_000;

/// Great-circle distance between two (latitude, longitude) points, in km.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sum of consecutive haversine legs over a track. Fewer than 2 points
/// is a zero-length track.
pub fn track_length_km(points: &[(f64, f64)]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    if points.len() >= PAR_THRESHOLD {
        points
            .par_windows(2)
            .map(|leg| haversine_km(leg[0], leg[1]))
            .sum()
    } else {
        points
            .windows(2)
            .map(|leg| haversine_km(leg[0], leg[1]))
            .sum()
    }
}

/// One raw tracker fix. The timestamp is optional; fixes without one
/// still pass the distance-based filter but skip the speed check.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub tm: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpStats {
    pub original: usize,
    pub kept: usize,
    pub removed: usize,
}

/// Drops GPS fixes that jump too far or imply an impossible speed.
#[derive(Debug, Clone, Copy)]
pub struct JumpFilter {
    pub max_jump_km: f64,
    pub max_speed_kmh: f64,
}

impl Default for JumpFilter {
    fn default() -> Self {
        Self {
            max_jump_km: 1.0,
            max_speed_kmh: 180.0,
        }
    }
}

impl JumpFilter {
    pub fn new(max_jump_km: f64, max_speed_kmh: f64) -> Self {
        Self {
            max_jump_km,
            max_speed_kmh,
        }
    }

    /// Filters a track, keeping the first point unconditionally. Each
    /// candidate is compared against the last *kept* point, so a burst
    /// of bad fixes does not drag the baseline away.
    pub fn apply(&self, points: &[TrackPoint]) -> (Vec<TrackPoint>, JumpStats) {
        let original = points.len();
        if original < 2 {
            return (
                points.to_vec(),
                JumpStats {
                    original,
                    kept: original,
                    removed: 0,
                },
            );
        }

        let mut kept = Vec::with_capacity(original);
        kept.push(points[0].clone());
        let mut removed = 0;
        let mut prev = &points[0];

        for point in &points[1..] {
            let leg_km = haversine_km((prev.lat, prev.lon), (point.lat, point.lon));

            let mut speed_ok = true;
            if let (Some(t1), Some(t2)) = (prev.tm, point.tm) {
                let dt_s = (t2 - t1).num_seconds();
                if dt_s > 0 {
                    let speed_kmh = leg_km / (dt_s as f64 / 3600.0);
                    if speed_kmh > self.max_speed_kmh {
                        speed_ok = false;
                    }
                }
            }

            if leg_km <= self.max_jump_km && speed_ok {
                kept.push(point.clone());
                prev = point;
            } else {
                removed += 1;
            }
        }

        let stats = JumpStats {
            original,
            kept: kept.len(),
            removed,
        };
        (kept, stats)
    }
}

/// Stride-downsamples a track for map rendering. Returns the slimmed
/// points and the stride that was applied (1 means untouched).
pub fn slim_points<T: Clone>(points: &[T], max_points: usize) -> (Vec<T>, usize) {
    let n = points.len();
    if max_points == 0 || n <= max_points {
        return (points.to_vec(), 1);
    }
    let step = (n / max_points).max(1);
    (points.iter().step_by(step).cloned().collect(), step)
}

/// Parses a backend timestamp, tolerating the space or `T` separator,
/// missing seconds, and a trailing `Z`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim().trim_end_matches('Z');
    if trimmed.is_empty() {
        return None;
    }
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}
