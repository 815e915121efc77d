//! Parking spot aggregate

pub mod layout;
pub mod model;

pub use layout::LotLayout;
pub use model::{ParkingSpot, SpotSize};
