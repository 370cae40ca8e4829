//! Route catalog: the in-memory table of known routes.
//!
//! Rebuilt wholesale from the backend's `/api/routes` response on every
//! (re)load. Malformed numeric fields are kept as absent rather than
//! rejected, so a half-filled catalog row still shows up for selection.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::numeric::parse_float;

/// Physical and reference attributes of one named route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub road_width_m: Option<f64>,
    pub road_length_km: Option<f64>,
    /// Reference tonnage of anti-icing material for the route.
    pub pss_tonnage_t: Option<f64>,
}

/// One entry of the backend route-list response, before tolerant
/// numeric conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub road_width_m: Option<Value>,
    #[serde(default)]
    pub road_length_km: Option<Value>,
    #[serde(default)]
    pub pss_tonnage_t: Option<Value>,
}

impl RawRoute {
    /// Converts a backend entry into a `Route`, or `None` when the name
    /// is missing or empty.
    pub fn into_route(self) -> Option<Route> {
        let name = self.name?.trim().to_string();
        if name.is_empty() {
            return None;
        }
        Some(Route {
            name,
            road_width_m: self.road_width_m.as_ref().and_then(parse_float),
            road_length_km: self.road_length_km.as_ref().and_then(parse_float),
            pss_tonnage_t: self.pss_tonnage_t.as_ref().and_then(parse_float),
        })
    }
}

/// Envelope of the backend route-list response.
#[derive(Debug, Deserialize)]
pub struct RoutesResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

/// Decodes a raw `/api/routes` payload into routes ready for
/// [`RouteCatalog::replace_all`]. Entries without a name are dropped.
pub fn decode_routes_response(payload: &Value) -> Result<Vec<Route>, serde_json::Error> {
    let response: RoutesResponse = serde_json::from_value(payload.clone())?;
    let total = response.routes.len();
    let routes: Vec<Route> = response
        .routes
        .into_iter()
        .filter_map(RawRoute::into_route)
        .collect();
    if routes.len() < total {
        warn!(
            skipped = total - routes.len(),
            "route entries without a name were skipped"
        );
    }
    Ok(routes)
}

/// The set of known routes, keyed by name.
///
/// Replaced atomically on every catalog load; readers observe either the
/// old or the new complete set, never a mix. `names()` preserves backend
/// order, first occurrence of a duplicate name wins.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    by_name: HashMap<String, Route>,
    order: Vec<String>,
}

impl RouteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full route set. No merging with prior state.
    pub fn replace_all(&mut self, routes: Vec<Route>) {
        let mut by_name = HashMap::with_capacity(routes.len());
        let mut order = Vec::with_capacity(routes.len());
        for route in routes {
            if route.name.is_empty() {
                continue;
            }
            if by_name.contains_key(&route.name) {
                continue;
            }
            order.push(route.name.clone());
            by_name.insert(route.name.clone(), route);
        }
        debug!(routes = order.len(), "route catalog replaced");
        self.by_name = by_name;
        self.order = order;
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name)
    }

    /// Route names in backend order, for populating selection lists.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
