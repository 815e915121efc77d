//! Parking ticket domain entity

use chrono::{DateTime, Duration, Utc};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::vehicle::{Vehicle, VehicleId, VehicleType};

/// Ticket number, unique per lot and never reused
pub type TicketNumber = u64;

/// Ticket lifecycle status.
///
/// `Active` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Active,
    Paid,
    Lost,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paid => "Paid",
            Self::Lost => "Lost",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parking ticket
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingTicket {
    pub number: TicketNumber,
    pub plate: String,
    pub vehicle_type: VehicleType,
    /// Handle into the lot's vehicle registry
    pub vehicle_id: VehicleId,
    entry_time: DateTime<Utc>,
    status: TicketStatus,
    /// Amount charged when the ticket was paid
    pub amount_paid: Option<f64>,
    pub paid_at: Option<DateTime<Utc>>,
    pub exit_time: Option<DateTime<Utc>>,
}

impl ParkingTicket {
    pub fn new(
        number: TicketNumber,
        vehicle_id: VehicleId,
        vehicle: &Vehicle,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            plate: vehicle.plate.clone(),
            vehicle_type: vehicle.vehicle_type,
            vehicle_id,
            entry_time,
            status: TicketStatus::Active,
            amount_paid: None,
            paid_at: None,
            exit_time: None,
        }
    }

    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == TicketStatus::Active
    }

    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }

    /// Active → Paid
    pub fn mark_paid(&mut self, amount: f64, at: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_active("only active tickets can be paid")?;
        self.status = TicketStatus::Paid;
        self.amount_paid = Some(amount);
        self.paid_at = Some(at);
        Ok(())
    }

    /// Active → Lost
    pub fn mark_lost(&mut self) -> DomainResult<()> {
        self.ensure_active("only active tickets can be reported lost")?;
        self.status = TicketStatus::Lost;
        Ok(())
    }

    pub fn set_exit_time(&mut self, at: DateTime<Utc>) {
        self.exit_time = Some(at);
    }

    /// Time parked up to `now`. Never negative.
    pub fn parked_duration(&self, now: DateTime<Utc>) -> Duration {
        (now - self.entry_time).max(Duration::zero())
    }

    fn ensure_active(&self, reason: &str) -> DomainResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(DomainError::InvalidTicket {
                number: self.number,
                reason: format!("{} (status is {})", reason, self.status),
            })
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
