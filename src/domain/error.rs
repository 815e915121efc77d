//! Domain errors

use thiserror::Error;

use super::spot::SpotSize;
use super::ticket::TicketNumber;
use super::vehicle::VehicleType;

/// Domain-level error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Vehicle {plate} already has active ticket {ticket}")]
    DuplicateTicket { plate: String, ticket: TicketNumber },

    #[error("No {size} spot available for {vehicle_type} {plate}")]
    NoSpotAvailable {
        plate: String,
        vehicle_type: VehicleType,
        size: SpotSize,
    },

    #[error("Invalid ticket {number}: {reason}")]
    InvalidTicket { number: TicketNumber, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payment of {amount:.2} declined: {reason}")]
    PaymentDeclined { amount: f64, reason: String },
}

impl DomainError {
    pub(crate) fn unknown_ticket(number: TicketNumber) -> Self {
        Self::InvalidTicket {
            number,
            reason: "no such active ticket".to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let dup = DomainError::DuplicateTicket {
            plate: "ABC123".into(),
            ticket: 4,
        };
        assert_eq!(dup.to_string(), "Vehicle ABC123 already has active ticket 4");

        let full = DomainError::NoSpotAvailable {
            plate: "XYZ".into(),
            vehicle_type: VehicleType::Car,
            size: SpotSize::Medium,
        };
        assert_eq!(full.to_string(), "No Medium spot available for Car XYZ");

        assert_eq!(
            DomainError::unknown_ticket(9).to_string(),
            "Invalid ticket 9: no such active ticket"
        );
    }
}
