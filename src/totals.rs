//! Form-level totals over all assignment rows.
//!
//! A pure fold, recomputed on every row change. Rows whose allocation is
//! undefined contribute nothing to the distance sum (not zero), and the
//! distance sum adds the already-rounded per-row figures so the total
//! always matches what the operator sees line by line.

use crate::row::RouteAssignmentRow;
use crate::vehicles::VehicleRegistry;

/// Summary figures shown in the trip-sheet footer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormTotals {
    pub tonnage_sum: f64,
    pub distance_sum: f64,
    /// Rows with a route selected, whatever their tonnage.
    pub trip_count: usize,
    pub vehicle_capacity: Option<f64>,
}

/// Folds the current rows and vehicle selection into totals.
pub fn recompute_totals(
    rows: &[RouteAssignmentRow],
    registry: &VehicleRegistry,
    selected_vehicle: Option<u32>,
) -> FormTotals {
    let mut totals = FormTotals::default();
    for row in rows {
        totals.tonnage_sum += row.delivered_tonnage.max(0.0);
        if let Some(km) = row.allocated_distance_km {
            totals.distance_sum += km;
        }
        if row.has_route() {
            totals.trip_count += 1;
        }
    }
    totals.vehicle_capacity = selected_vehicle.and_then(|id| registry.capacity_of(id));
    totals
}

/// Formats a summary figure the way the form renders it: an em-dash for
/// zero, otherwise two decimals with a comma separator ("14,29").
///
/// Zero and "no data" are indistinguishable here on purpose; the form has
/// always shown both as a dash.
pub fn format_total(value: f64) -> String {
    if value == 0.0 {
        "—".to_string()
    } else {
        format!("{:.2}", value).replace('.', ",")
    }
}

/// Row-level display: an undefined allocation renders empty, never "0,00".
pub fn format_row_distance(value: Option<f64>) -> String {
    match value {
        Some(km) => format!("{:.2}", km).replace('.', ","),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Route, RouteCatalog};

    fn catalog() -> RouteCatalog {
        let mut catalog = RouteCatalog::new();
        catalog.replace_all(vec![Route {
            name: "R1".to_string(),
            road_width_m: Some(7.0),
            road_length_km: Some(10.0),
            pss_tonnage_t: Some(50.0),
        }]);
        catalog
    }

    fn row_with(tonnage: f64, route: Option<&str>, catalog: &RouteCatalog) -> RouteAssignmentRow {
        let mut row = RouteAssignmentRow::new();
        row.set_tonnage(tonnage);
        if let Some(name) = route {
            row.select_route(name, catalog);
        }
        row
    }

    #[test]
    fn sums_rounded_row_distances() {
        let catalog = catalog();
        let rows = vec![
            row_with(5.0, Some("R1"), &catalog),  // 3.57
            row_with(20.0, Some("R1"), &catalog), // clamped to 10.00
        ];
        let totals = recompute_totals(&rows, &VehicleRegistry::default_fleet(), None);
        assert_eq!(totals.distance_sum, 13.57);
        assert_eq!(totals.tonnage_sum, 25.0);
        assert_eq!(totals.trip_count, 2);
    }

    #[test]
    fn undefined_rows_contribute_nothing_to_distance() {
        let catalog = catalog();
        let rows = vec![
            row_with(5.0, Some("R1"), &catalog),
            row_with(0.0, Some("R1"), &catalog), // counted as a trip, no distance
            row_with(4.0, None, &catalog),       // no route: tonnage still sums
        ];
        let totals = recompute_totals(&rows, &VehicleRegistry::default_fleet(), None);
        assert_eq!(totals.distance_sum, 3.57);
        assert_eq!(totals.tonnage_sum, 9.0);
        assert_eq!(totals.trip_count, 2);
    }

    #[test]
    fn negative_tonnage_contributes_zero() {
        let catalog = catalog();
        let rows = vec![row_with(-3.0, Some("R1"), &catalog)];
        let totals = recompute_totals(&rows, &VehicleRegistry::default_fleet(), None);
        assert_eq!(totals.tonnage_sum, 0.0);
        assert_eq!(totals.trip_count, 1);
    }

    #[test]
    fn vehicle_capacity_lookup() {
        let registry = VehicleRegistry::default_fleet();
        let totals = recompute_totals(&[], &registry, Some(182));
        assert_eq!(totals.vehicle_capacity, Some(15.0));

        let totals = recompute_totals(&[], &registry, Some(999));
        assert_eq!(totals.vehicle_capacity, None);

        let totals = recompute_totals(&[], &registry, None);
        assert_eq!(totals.vehicle_capacity, None);
    }

    #[test]
    fn zero_renders_as_dash() {
        assert_eq!(format_total(0.0), "—");
        assert_eq!(format_total(13.57), "13,57");
    }

    #[test]
    fn undefined_row_renders_empty() {
        assert_eq!(format_row_distance(None), "");
        assert_eq!(format_row_distance(Some(3.57)), "3,57");
        assert_eq!(format_row_distance(Some(0.0)), "0,00");
    }
}
