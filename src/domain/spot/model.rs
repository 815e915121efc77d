//! Parking spot domain entity

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::vehicle::VehicleId;

/// Spot size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpotSize {
    Small,
    Medium,
    Large,
}

impl SpotSize {
    pub const ALL: [SpotSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl std::fmt::Display for SpotSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single-capacity parking slot.
///
/// The occupant handle is private so that "occupied" and "has an occupant"
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    pub number: u32,
    pub size: SpotSize,
    occupant: Option<VehicleId>,
}

impl ParkingSpot {
    pub fn new(number: u32, size: SpotSize) -> Self {
        Self {
            number,
            size,
            occupant: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_available_for(&self, size: SpotSize) -> bool {
        !self.is_occupied() && self.size == size
    }

    pub fn occupant(&self) -> Option<VehicleId> {
        self.occupant
    }

    /// Bind a vehicle to this spot. Fails if the spot is already taken.
    pub fn occupy(&mut self, vehicle: VehicleId) -> DomainResult<()> {
        if let Some(current) = self.occupant {
            return Err(DomainError::InvalidInput(format!(
                "spot {} is already held by vehicle {}",
                self.number, current
            )));
        }
        self.occupant = Some(vehicle);
        Ok(())
    }

    /// Release the spot, returning the vehicle that was parked here.
    pub fn release(&mut self) -> Option<VehicleId> {
        self.occupant.take()
    }
}

// ── Tests ──────────────────────────────────────────────────────
