//! Vehicle aggregate
//!
//! Contains the Vehicle entity and the registry that owns vehicles on the lot.

pub mod model;
pub mod registry;

pub use model::{Vehicle, VehicleType};
pub use registry::{VehicleId, VehicleRegistry};
