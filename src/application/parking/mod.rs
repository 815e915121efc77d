//! Parking use cases: the lot itself and payment handling.

pub mod lot;
pub mod payment;

pub use lot::{Admission, ExitReceipt, Occupancy, ParkingLot};
pub use payment::{AcceptingProcessor, PaymentProcessor};
