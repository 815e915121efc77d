//! Parking ticket aggregate

pub mod model;

pub use model::{ParkingTicket, TicketNumber, TicketStatus};
