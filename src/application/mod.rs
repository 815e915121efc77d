pub mod commands;
pub mod parking;

// Re-export key types for convenience
pub use commands::{Command, CommandDispatcher, CommandOutcome, TicketSummary};
pub use parking::{
    AcceptingProcessor, Admission, ExitReceipt, Occupancy, ParkingLot, PaymentProcessor,
};
