//! Vehicle domain entity

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::spot::SpotSize;

/// Vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Motorcycle,
    Car,
    Truck,
}

impl VehicleType {
    /// All vehicle classes in menu order.
    pub const ALL: [VehicleType; 3] = [Self::Motorcycle, Self::Car, Self::Truck];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "Motorcycle",
            Self::Car => "Car",
            Self::Truck => "Truck",
        }
    }

    /// Spot size a vehicle of this class must park in. There is no fallback
    /// to a larger size.
    pub fn required_spot_size(&self) -> SpotSize {
        match self {
            Self::Motorcycle => SpotSize::Small,
            Self::Car => SpotSize::Medium,
            Self::Truck => SpotSize::Large,
        }
    }

    /// Resolve the console index (0: Motorcycle, 1: Car, 2: Truck).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vehicle identity record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// License plate, trimmed and never empty
    pub plate: String,
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, vehicle_type: VehicleType) -> DomainResult<Self> {
        let plate = plate.into().trim().to_string();
        if plate.is_empty() {
            return Err(DomainError::InvalidInput(
                "license plate must not be empty".to_string(),
            ));
        }
        Ok(Self {
            plate,
            vehicle_type,
        })
    }

    pub fn required_spot_size(&self) -> SpotSize {
        self.vehicle_type.required_spot_size()
    }
}

// ── Tests ──────────────────────────────────────────────────────
