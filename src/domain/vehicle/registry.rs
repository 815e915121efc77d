//! Registry of vehicles currently known to the lot.
//!
//! Spots and tickets never hold a vehicle directly; they keep a [`VehicleId`]
//! and resolve it here. Removing a vehicle makes its handle dangle safely:
//! lookups return `None` instead of reading freed memory.

use std::collections::BTreeMap;

use super::model::Vehicle;

/// Handle to a vehicle in a [`VehicleRegistry`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(u64);

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct VehicleRegistry {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    next_id: u64,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, vehicle: Vehicle) -> VehicleId {
        self.next_id += 1;
        let id = VehicleId(self.next_id);
        self.vehicles.insert(id, vehicle);
        id
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn remove(&mut self, id: VehicleId) -> Option<Vehicle> {
        self.vehicles.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
