//! Vehicle registry: tracker id to display name and cargo capacity.
//!
//! The vehicle set is static for a session; unknown ids resolve to `None`
//! and are rendered as a placeholder downstream.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A dump truck known to the dispatcher, keyed by its tracker id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub display_name: String,
    /// Rated cargo capacity in tonnes.
    pub tonnage_capacity: f64,
}

impl Vehicle {
    pub fn new(id: u32, display_name: impl Into<String>, tonnage_capacity: f64) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            tonnage_capacity,
        }
    }
}

/// Lookup table over the session's vehicle set.
#[derive(Debug, Clone, Default)]
pub struct VehicleRegistry {
    by_id: HashMap<u32, Vehicle>,
}

impl VehicleRegistry {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        let by_id = vehicles.into_iter().map(|v| (v.id, v)).collect();
        Self { by_id }
    }

    /// The fleet tracked by the production deployment.
    pub fn default_fleet() -> Self {
        Self::new(vec![
            Vehicle::new(182, "КамАЗ-65115", 15.0),
            Vehicle::new(716, "МАЗ-5516", 20.0),
            Vehicle::new(717, "МАЗ-5516", 20.0),
            Vehicle::new(719, "КамАЗ-6520", 20.0),
            Vehicle::new(432, "КамАЗ-55111", 13.0),
        ])
    }

    pub fn get(&self, id: u32) -> Option<&Vehicle> {
        self.by_id.get(&id)
    }

    pub fn capacity_of(&self, id: u32) -> Option<f64> {
        self.get(id).map(|v| v.tonnage_capacity)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
