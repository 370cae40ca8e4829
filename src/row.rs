//! Per-row distance allocation.
//!
//! One route assignment row pairs a named route with a delivered tonnage.
//! The allocated distance is tonnage divided by a width-dependent spread
//! coefficient, capped at the route's physical length. No route or a
//! non-positive tonnage means the allocation is undefined, which is a
//! different thing than an allocation of zero.

use crate::catalog::RouteCatalog;
use crate::numeric::round2;

/// Width match tolerance for coefficient selection, in meters.
const WIDTH_EPSILON: f64 = 0.01;

/// Spread coefficient for a 7 m roadway.
const COEFF_WIDE: f64 = 1.4;

/// Spread coefficient for a 6 m roadway and the fallback for any other
/// (or unknown) width.
const COEFF_DEFAULT: f64 = 1.2;

/// Picks the spread coefficient from the road width the row has
/// snapshotted. Absent width falls back to the 1.2 default.
pub fn spread_coefficient(road_width_m: Option<f64>) -> f64 {
    match road_width_m {
        Some(w) if (w - 7.0).abs() <= WIDTH_EPSILON => COEFF_WIDE,
        Some(w) if (w - 6.0).abs() <= WIDTH_EPSILON => COEFF_DEFAULT,
        _ => COEFF_DEFAULT,
    }
}

/// Computes the allocated distance for one row, rounded to 2 decimals.
///
/// `route_selected` distinguishes "no route picked" (undefined result)
/// from a picked route whose attributes failed to parse (calculation
/// proceeds with defaults). The cap applies before rounding; an absent
/// road length caps nothing.
pub fn allocated_distance_km(
    delivered_tonnage: f64,
    route_selected: bool,
    road_width_m: Option<f64>,
    road_length_km: Option<f64>,
) -> Option<f64> {
    if !route_selected || delivered_tonnage <= 0.0 {
        return None;
    }
    let mut distance_km = delivered_tonnage / spread_coefficient(road_width_m);
    if let Some(length) = road_length_km {
        if distance_km > length {
            distance_km = length;
        }
    }
    Some(round2(distance_km))
}

/// One line of the trip-sheet form.
///
/// Route attributes are copied out of the catalog at selection time. The
/// snapshot is deliberate: a later catalog reload must not retroactively
/// change rows the operator already filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteAssignmentRow {
    pub selected_route: Option<String>,
    pub delivered_tonnage: f64,
    pub road_width_m: Option<f64>,
    pub road_length_km: Option<f64>,
    pub pss_tonnage_t: Option<f64>,
    pub allocated_distance_km: Option<f64>,
}

impl RouteAssignmentRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a route and snapshots its attributes from the catalog.
    ///
    /// An unknown name still counts as a selection; its attributes are
    /// simply absent.
    pub fn select_route(&mut self, name: &str, catalog: &RouteCatalog) {
        self.selected_route = Some(name.to_string());
        match catalog.get(name) {
            Some(route) => {
                self.road_width_m = route.road_width_m;
                self.road_length_km = route.road_length_km;
                self.pss_tonnage_t = route.pss_tonnage_t;
            }
            None => {
                self.road_width_m = None;
                self.road_length_km = None;
                self.pss_tonnage_t = None;
            }
        }
        self.recompute();
    }

    /// Clears the route selection and the snapshot taken with it.
    pub fn clear_route(&mut self) {
        self.selected_route = None;
        self.road_width_m = None;
        self.road_length_km = None;
        self.pss_tonnage_t = None;
        self.recompute();
    }

    pub fn set_tonnage(&mut self, tonnage: f64) {
        self.delivered_tonnage = tonnage;
        self.recompute();
    }

    pub fn has_route(&self) -> bool {
        self.selected_route
            .as_deref()
            .is_some_and(|name| !name.is_empty())
    }

    /// Recomputes the cached allocation from current row state.
    pub fn recompute(&mut self) -> Option<f64> {
        self.allocated_distance_km = allocated_distance_km(
            self.delivered_tonnage,
            self.has_route(),
            self.road_width_m,
            self.road_length_km,
        );
        self.allocated_distance_km
    }
}
