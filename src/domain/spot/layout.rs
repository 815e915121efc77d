//! Fixed spot counts per size class

use super::model::{ParkingSpot, SpotSize};

/// Number of spots of each size a lot is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotLayout {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl LotLayout {
    pub fn new(small: u32, medium: u32, large: u32) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    pub fn count(&self, size: SpotSize) -> u32 {
        match size {
            SpotSize::Small => self.small,
            SpotSize::Medium => self.medium,
            SpotSize::Large => self.large,
        }
    }

    pub fn total(&self) -> u32 {
        self.small + self.medium + self.large
    }

    /// Build the spot inventory. Numbers start at 1 and run through all small
    /// spots, then medium, then large.
    pub fn build_spots(&self) -> Vec<ParkingSpot> {
        let mut spots = Vec::with_capacity(self.total() as usize);
        let mut number = 1;
        for size in SpotSize::ALL {
            for _ in 0..self.count(size) {
                spots.push(ParkingSpot::new(number, size));
                number += 1;
            }
        }
        spots
    }
}

impl Default for LotLayout {
    fn default() -> Self {
        Self::new(10, 10, 5)
    }
}
