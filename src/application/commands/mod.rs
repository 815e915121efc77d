//! Commands accepted by the parking lot front desk and their outcomes.
//!
//! Every menu action becomes a [`Command`]; the [`CommandDispatcher`] runs it
//! against the lot and answers with a [`CommandOutcome`] or a domain error.

pub mod dispatcher;

use chrono::{DateTime, Duration, Utc};

use crate::application::parking::{Admission, ExitReceipt, Occupancy};
use crate::domain::{ParkingSpot, ParkingTicket, TicketNumber, TicketStatus, VehicleType};

pub use dispatcher::CommandDispatcher;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    IssueTicket {
        plate: String,
        vehicle_type: VehicleType,
    },
    /// Issue and park in one step; nothing is left behind if no spot is free.
    Admit {
        plate: String,
        vehicle_type: VehicleType,
    },
    ViewTickets,
    Park {
        ticket: TicketNumber,
    },
    Exit {
        ticket: TicketNumber,
    },
    Pay {
        ticket: TicketNumber,
    },
    AvailableSpots,
    ReportLost {
        ticket: TicketNumber,
    },
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IssueTicket { .. } => "issue_ticket",
            Self::Admit { .. } => "admit",
            Self::ViewTickets => "view_tickets",
            Self::Park { .. } => "park",
            Self::Exit { .. } => "exit",
            Self::Pay { .. } => "pay",
            Self::AvailableSpots => "available_spots",
            Self::ReportLost { .. } => "report_lost",
            Self::Quit => "quit",
        }
    }
}

/// One row of the ticket listing
#[derive(Debug, Clone, PartialEq)]
pub struct TicketSummary {
    pub number: TicketNumber,
    pub plate: String,
    pub vehicle_type: VehicleType,
    pub status: TicketStatus,
    pub entry_time: DateTime<Utc>,
    pub parked_for: Duration,
    pub spot_number: Option<u32>,
    /// Amount paid for Paid tickets, otherwise the fee accrued so far
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    TicketIssued(ParkingTicket),
    Admitted(Admission),
    Tickets(Vec<TicketSummary>),
    Parked {
        ticket: TicketNumber,
        plate: String,
        spot_number: u32,
    },
    Paid {
        ticket: ParkingTicket,
        amount: f64,
    },
    Exited(ExitReceipt),
    AvailableSpots {
        spots: Vec<ParkingSpot>,
        occupancy: Vec<Occupancy>,
    },
    MarkedLost(ParkingTicket),
    Quit,
}
