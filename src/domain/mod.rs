pub mod error;
pub mod spot;
pub mod tariff;
pub mod ticket;
pub mod vehicle;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use spot::{LotLayout, ParkingSpot, SpotSize};
pub use tariff::Tariff;
pub use ticket::{ParkingTicket, TicketNumber, TicketStatus};
pub use vehicle::{Vehicle, VehicleId, VehicleRegistry, VehicleType};
