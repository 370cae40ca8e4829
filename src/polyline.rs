//! Polyline representation for normalized trip geometry.
//!
//! Stores decoded (latitude, longitude) points directly. Whatever shape
//! the backend sent, the map layer only ever sees this type.

use serde::{Deserialize, Serialize};

/// An ordered coordinate sequence, latitude first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a polyline from (latitude, longitude) pairs.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the line has enough points to draw.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }
}
