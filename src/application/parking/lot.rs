//! Parking lot: spot inventory, ticket issuance and the fee/exit flow.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::domain::{
    DomainError, DomainResult, LotLayout, ParkingSpot, ParkingTicket, SpotSize, Tariff,
    TicketNumber, Vehicle, VehicleId, VehicleRegistry, VehicleType,
};
use crate::shared::clock::Clock;

/// Result of [`ParkingLot::admit`]
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    pub ticket: ParkingTicket,
    pub spot_number: u32,
}

/// Result of a successful [`ParkingLot::exit_vehicle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExitReceipt {
    pub ticket: ParkingTicket,
    /// Spot that was released, if the vehicle had been parked
    pub spot_number: Option<u32>,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub amount_paid: f64,
}

/// Spot usage for one size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub size: SpotSize,
    pub total: usize,
    pub occupied: usize,
}

impl Occupancy {
    pub fn available(&self) -> usize {
        self.total - self.occupied
    }
}

pub struct ParkingLot {
    spots: Vec<ParkingSpot>,
    active_tickets: BTreeMap<TicketNumber, ParkingTicket>,
    vehicles: VehicleRegistry,
    next_ticket_number: TicketNumber,
    tariff: Tariff,
    clock: Arc<dyn Clock>,
}

impl ParkingLot {
    pub fn new(layout: LotLayout, tariff: Tariff, clock: Arc<dyn Clock>) -> Self {
        let spots = layout.build_spots();
        info!(
            "Parking lot opened with {} spots ({} small, {} medium, {} large) at {}/hour",
            spots.len(),
            layout.small,
            layout.medium,
            layout.large,
            tariff.format_cost(tariff.hourly_rate)
        );
        Self {
            spots,
            active_tickets: BTreeMap::new(),
            vehicles: VehicleRegistry::new(),
            next_ticket_number: 1,
            tariff,
            clock,
        }
    }

    // ─── Spot allocation ───────────────────────────────────────────────

    /// First free spot of the size this vehicle class requires, lowest number
    /// first. Larger spots are never offered as a fallback.
    pub fn find_available_spot(&self, vehicle_type: VehicleType) -> Option<&ParkingSpot> {
        let size = vehicle_type.required_spot_size();
        let spot = self.spots.iter().find(|s| s.is_available_for(size));
        debug!(%vehicle_type, %size, spot = ?spot.map(|s| s.number), "Spot lookup");
        spot
    }

    // ─── Tickets ───────────────────────────────────────────────────────

    /// Register the vehicle and open an Active ticket for it.
    pub fn issue_ticket(&mut self, vehicle: Vehicle) -> DomainResult<ParkingTicket> {
        if let Some(existing) = self.active_ticket_for_plate(&vehicle.plate) {
            warn!(
                "Vehicle {} already has active ticket {}",
                vehicle.plate, existing.number
            );
            return Err(DomainError::DuplicateTicket {
                plate: vehicle.plate,
                ticket: existing.number,
            });
        }

        let number = self.next_ticket_number;
        self.next_ticket_number += 1;

        let vehicle_id = self.vehicles.register(vehicle.clone());
        let ticket = ParkingTicket::new(number, vehicle_id, &vehicle, self.clock.now());
        self.active_tickets.insert(number, ticket.clone());

        info!("Ticket {} issued for vehicle {}", number, ticket.plate);
        Ok(ticket)
    }

    /// Put the ticket's vehicle into the first matching free spot.
    pub fn park_vehicle(&mut self, number: TicketNumber) -> DomainResult<u32> {
        let ticket = self
            .active_tickets
            .get(&number)
            .ok_or_else(|| DomainError::unknown_ticket(number))?;

        if !ticket.is_active() {
            return Err(DomainError::InvalidTicket {
                number,
                reason: format!("only active tickets can be parked (status is {})", ticket.status()),
            });
        }

        let vehicle_id = ticket.vehicle_id;
        if let Some(spot) = self.spot_holding(vehicle_id) {
            return Err(DomainError::InvalidTicket {
                number,
                reason: format!("vehicle is already parked at spot {}", spot.number),
            });
        }

        let vehicle = self
            .vehicles
            .get(vehicle_id)
            .ok_or_else(|| DomainError::InvalidTicket {
                number,
                reason: "vehicle is no longer registered".to_string(),
            })?;

        let size = vehicle.required_spot_size();
        let Some(index) = self.spots.iter().position(|s| s.is_available_for(size)) else {
            warn!("No available {} spot for vehicle {}", size, vehicle.plate);
            return Err(DomainError::NoSpotAvailable {
                plate: vehicle.plate.clone(),
                vehicle_type: vehicle.vehicle_type,
                size,
            });
        };

        let plate = vehicle.plate.clone();
        let spot = &mut self.spots[index];
        spot.occupy(vehicle_id)?;
        info!("Vehicle {} parked at spot {}", plate, spot.number);
        Ok(spot.number)
    }

    /// Issue a ticket and park in one step.
    ///
    /// When no spot is free the new ticket is withdrawn again, so a failed
    /// admission leaves no Active ticket behind. Its number stays consumed.
    pub fn admit(&mut self, vehicle: Vehicle) -> DomainResult<Admission> {
        let ticket = self.issue_ticket(vehicle)?;
        match self.park_vehicle(ticket.number) {
            Ok(spot_number) => Ok(Admission {
                ticket,
                spot_number,
            }),
            Err(e) => {
                self.withdraw_ticket(ticket.number);
                Err(e)
            }
        }
    }

    /// Fee owed for the ticket as of now.
    pub fn calculate_fee(&self, number: TicketNumber) -> DomainResult<f64> {
        let ticket = self.find_ticket(number)?;
        let fee = self
            .tariff
            .fee_for(ticket.parked_duration(self.clock.now()));
        info!(
            "Fee for ticket {}: {}",
            number,
            self.tariff.format_cost(fee)
        );
        Ok(fee)
    }

    /// Active → Paid, recording the amount charged.
    pub fn pay_ticket(&mut self, number: TicketNumber, amount: f64) -> DomainResult<ParkingTicket> {
        let now = self.clock.now();
        let ticket = self
            .active_tickets
            .get_mut(&number)
            .ok_or_else(|| DomainError::unknown_ticket(number))?;

        if let Err(e) = ticket.mark_paid(amount, now) {
            warn!("Payment rejected for ticket {}: {}", number, e);
            return Err(e);
        }

        info!(
            "Ticket {} marked as paid ({})",
            number,
            self.tariff.format_cost(amount)
        );
        Ok(ticket.clone())
    }

    /// Active → Lost. The ticket stays listed and its vehicle stays parked.
    ///
    /// A Lost ticket can never be paid or exited, so its spot stays held for
    /// the life of the lot. The plate itself is free to take a new ticket.
    pub fn report_lost(&mut self, number: TicketNumber) -> DomainResult<ParkingTicket> {
        let ticket = self
            .active_tickets
            .get_mut(&number)
            .ok_or_else(|| DomainError::unknown_ticket(number))?;
        ticket.mark_lost()?;
        info!("Ticket {} marked as lost", number);
        Ok(ticket.clone())
    }

    /// Release the spot of a paid ticket and retire the ticket.
    ///
    /// Nothing changes unless the ticket is Paid.
    pub fn exit_vehicle(&mut self, number: TicketNumber) -> DomainResult<ExitReceipt> {
        let ticket = self.find_ticket(number)?;
        if !ticket.is_paid() {
            warn!("Exit refused for ticket {}: status is {}", number, ticket.status());
            return Err(DomainError::InvalidTicket {
                number,
                reason: format!(
                    "payment is required before exiting (status is {})",
                    ticket.status()
                ),
            });
        }

        let mut ticket = self
            .active_tickets
            .remove(&number)
            .ok_or_else(|| DomainError::unknown_ticket(number))?;
        let exit_time = self.clock.now();
        ticket.set_exit_time(exit_time);

        let spot_number = self
            .spots
            .iter_mut()
            .find(|s| s.occupant() == Some(ticket.vehicle_id))
            .map(|spot| {
                spot.release();
                spot.number
            });
        self.vehicles.remove(ticket.vehicle_id);
        debug!(vehicles = self.vehicles.len(), "Vehicle removed from registry");

        match spot_number {
            Some(spot) => info!("Vehicle {} exited from spot {}", ticket.plate, spot),
            None => warn!("Vehicle {} exited without a parked spot", ticket.plate),
        }

        Ok(ExitReceipt {
            entry_time: ticket.entry_time(),
            exit_time,
            amount_paid: ticket.amount_paid.unwrap_or(0.0),
            spot_number,
            ticket,
        })
    }

    // ─── Queries ───────────────────────────────────────────────────────

    pub fn ticket(&self, number: TicketNumber) -> Option<&ParkingTicket> {
        self.active_tickets.get(&number)
    }

    /// Tickets in the active set (Active, Paid-not-exited and Lost), by number.
    pub fn active_tickets(&self) -> impl Iterator<Item = &ParkingTicket> {
        self.active_tickets.values()
    }

    pub fn active_ticket_for_plate(&self, plate: &str) -> Option<&ParkingTicket> {
        self.active_tickets
            .values()
            .find(|t| t.is_active() && t.plate == plate)
    }

    /// Spot currently held by the ticket's vehicle.
    pub fn spot_for_ticket(&self, number: TicketNumber) -> Option<&ParkingSpot> {
        let ticket = self.active_tickets.get(&number)?;
        self.spot_holding(ticket.vehicle_id)
    }

    pub fn parked_duration(&self, number: TicketNumber) -> DomainResult<Duration> {
        let ticket = self.find_ticket(number)?;
        Ok(ticket.parked_duration(self.clock.now()))
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn available_spots(&self) -> impl Iterator<Item = &ParkingSpot> {
        self.spots.iter().filter(|s| !s.is_occupied())
    }

    pub fn occupancy(&self) -> Vec<Occupancy> {
        SpotSize::ALL
            .iter()
            .map(|&size| {
                let of_size = self.spots.iter().filter(|s| s.size == size);
                Occupancy {
                    size,
                    total: of_size.clone().count(),
                    occupied: of_size.filter(|s| s.is_occupied()).count(),
                }
            })
            .collect()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ─── Internals ─────────────────────────────────────────────────────

    fn find_ticket(&self, number: TicketNumber) -> DomainResult<&ParkingTicket> {
        self.active_tickets
            .get(&number)
            .ok_or_else(|| DomainError::unknown_ticket(number))
    }

    fn spot_holding(&self, vehicle_id: VehicleId) -> Option<&ParkingSpot> {
        self.spots.iter().find(|s| s.occupant() == Some(vehicle_id))
    }

    fn withdraw_ticket(&mut self, number: TicketNumber) {
        if let Some(ticket) = self.active_tickets.remove(&number) {
            self.vehicles.remove(ticket.vehicle_id);
            info!("Ticket {} withdrawn for vehicle {}", number, ticket.plate);
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
