//! Command dispatcher: the single entry point the console uses to act on
//! the lot.

use tracing::{info, warn};

use super::{Command, CommandOutcome, TicketSummary};
use crate::application::parking::{ParkingLot, PaymentProcessor};
use crate::domain::{DomainError, DomainResult, TicketNumber, Vehicle};

pub struct CommandDispatcher {
    lot: ParkingLot,
    payments: Box<dyn PaymentProcessor>,
}

impl CommandDispatcher {
    pub fn new(lot: ParkingLot, payments: Box<dyn PaymentProcessor>) -> Self {
        Self { lot, payments }
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    pub fn dispatch(&mut self, command: Command) -> DomainResult<CommandOutcome> {
        let name = command.name();
        let result = match command {
            Command::IssueTicket {
                plate,
                vehicle_type,
            } => {
                let vehicle = Vehicle::new(plate, vehicle_type)?;
                self.lot
                    .issue_ticket(vehicle)
                    .map(CommandOutcome::TicketIssued)
            }
            Command::Admit {
                plate,
                vehicle_type,
            } => {
                let vehicle = Vehicle::new(plate, vehicle_type)?;
                self.lot.admit(vehicle).map(CommandOutcome::Admitted)
            }
            Command::ViewTickets => Ok(CommandOutcome::Tickets(self.ticket_summaries())),
            Command::Park { ticket } => self.park(ticket),
            Command::Pay { ticket } => self.pay(ticket),
            Command::Exit { ticket } => self.lot.exit_vehicle(ticket).map(CommandOutcome::Exited),
            Command::AvailableSpots => Ok(CommandOutcome::AvailableSpots {
                spots: self.lot.available_spots().cloned().collect(),
                occupancy: self.lot.occupancy(),
            }),
            Command::ReportLost { ticket } => {
                self.lot.report_lost(ticket).map(CommandOutcome::MarkedLost)
            }
            Command::Quit => {
                info!("Front desk closing");
                Ok(CommandOutcome::Quit)
            }
        };

        if let Err(ref e) = result {
            warn!(command = name, "Command failed: {}", e);
        }
        result
    }

    fn park(&mut self, ticket: TicketNumber) -> DomainResult<CommandOutcome> {
        let spot_number = self.lot.park_vehicle(ticket)?;
        let plate = self
            .lot
            .ticket(ticket)
            .map(|t| t.plate.clone())
            .unwrap_or_default();
        Ok(CommandOutcome::Parked {
            ticket,
            plate,
            spot_number,
        })
    }

    /// Quote the fee, charge it, then mark the ticket paid.
    fn pay(&mut self, number: TicketNumber) -> DomainResult<CommandOutcome> {
        let ticket = self
            .lot
            .ticket(number)
            .ok_or_else(|| DomainError::unknown_ticket(number))?;
        if !ticket.is_active() {
            return Err(DomainError::InvalidTicket {
                number,
                reason: format!("only active tickets can be paid (status is {})", ticket.status()),
            });
        }

        let amount = self.lot.calculate_fee(number)?;
        self.payments.process_payment(amount)?;
        let ticket = self.lot.pay_ticket(number, amount)?;
        Ok(CommandOutcome::Paid { ticket, amount })
    }

    fn ticket_summaries(&self) -> Vec<TicketSummary> {
        let now = self.lot.now();
        let tariff = self.lot.tariff();
        self.lot
            .active_tickets()
            .map(|t| {
                let parked_for = t.parked_duration(now);
                TicketSummary {
                    number: t.number,
                    plate: t.plate.clone(),
                    vehicle_type: t.vehicle_type,
                    status: t.status(),
                    entry_time: t.entry_time(),
                    parked_for,
                    spot_number: self.lot.spot_for_ticket(t.number).map(|s| s.number),
                    fee: t
                        .amount_paid
                        .unwrap_or_else(|| tariff.fee_for(parked_for)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::*;
    use crate::application::parking::AcceptingProcessor;
    use crate::domain::{LotLayout, Tariff, TicketStatus, VehicleType};
    use crate::shared::clock::ManualClock;

    struct DecliningProcessor;

    impl PaymentProcessor for DecliningProcessor {
        fn process_payment(&self, amount: f64) -> DomainResult<()> {
            Err(DomainError::PaymentDeclined {
                amount,
                reason: "card rejected".into(),
            })
        }
    }

    fn dispatcher_with(
        payments: Box<dyn PaymentProcessor>,
    ) -> (CommandDispatcher, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let lot = ParkingLot::new(LotLayout::new(1, 1, 1), Tariff::default(), clock.clone());
        (CommandDispatcher::new(lot, payments), clock)
    }

    fn issue(d: &mut CommandDispatcher, plate: &str, vehicle_type: VehicleType) -> TicketNumber {
        match d
            .dispatch(Command::IssueTicket {
                plate: plate.into(),
                vehicle_type,
            })
            .unwrap()
        {
            CommandOutcome::TicketIssued(t) => t.number,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn issue_park_pay_exit() {
        let (mut d, clock) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let n = issue(&mut d, "ABC123", VehicleType::Car);

        let parked = d.dispatch(Command::Park { ticket: n }).unwrap();
        assert_eq!(
            parked,
            CommandOutcome::Parked {
                ticket: n,
                plate: "ABC123".into(),
                spot_number: 2,
            }
        );

        clock.advance(Duration::hours(2));
        match d.dispatch(Command::Pay { ticket: n }).unwrap() {
            CommandOutcome::Paid { ticket, amount } => {
                assert_eq!(amount, 20.0);
                assert_eq!(ticket.status(), TicketStatus::Paid);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        match d.dispatch(Command::Exit { ticket: n }).unwrap() {
            CommandOutcome::Exited(receipt) => {
                assert_eq!(receipt.spot_number, Some(2));
                assert_eq!(receipt.amount_paid, 20.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(d.lot().active_tickets().count(), 0);
    }

    #[test]
    fn empty_plate_is_invalid_input() {
        let (mut d, _) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let err = d
            .dispatch(Command::IssueTicket {
                plate: " ".into(),
                vehicle_type: VehicleType::Car,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn declined_payment_leaves_ticket_active() {
        let (mut d, _) = dispatcher_with(Box::new(DecliningProcessor));
        let n = issue(&mut d, "ABC123", VehicleType::Car);

        let err = d.dispatch(Command::Pay { ticket: n }).unwrap_err();
        assert!(matches!(err, DomainError::PaymentDeclined { .. }));
        assert_eq!(d.lot().ticket(n).unwrap().status(), TicketStatus::Active);
    }

    #[test]
    fn paying_twice_is_refused_before_charging() {
        let (mut d, _) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let n = issue(&mut d, "ABC123", VehicleType::Car);
        d.dispatch(Command::Pay { ticket: n }).unwrap();
        assert!(matches!(
            d.dispatch(Command::Pay { ticket: n }),
            Err(DomainError::InvalidTicket { .. })
        ));
    }

    #[test]
    fn view_tickets_summarises_active_set() {
        let (mut d, clock) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let a = issue(&mut d, "AAA", VehicleType::Motorcycle);
        let b = issue(&mut d, "BBB", VehicleType::Truck);
        d.dispatch(Command::Park { ticket: a }).unwrap();
        clock.advance(Duration::minutes(90));
        d.dispatch(Command::ReportLost { ticket: b }).unwrap();

        let CommandOutcome::Tickets(rows) = d.dispatch(Command::ViewTickets).unwrap() else {
            panic!("expected ticket listing");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, a);
        assert_eq!(rows[0].spot_number, Some(1));
        assert_eq!(rows[0].parked_for, Duration::minutes(90));
        assert_eq!(rows[0].fee, 15.0);
        assert_eq!(rows[1].status, TicketStatus::Lost);
        assert_eq!(rows[1].spot_number, None);
    }

    #[test]
    fn available_spots_reflect_parking() {
        let (mut d, _) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let n = issue(&mut d, "AAA", VehicleType::Car);
        d.dispatch(Command::Park { ticket: n }).unwrap();

        let CommandOutcome::AvailableSpots { spots, occupancy } =
            d.dispatch(Command::AvailableSpots).unwrap()
        else {
            panic!("expected spot listing");
        };
        assert_eq!(spots.iter().map(|s| s.number).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(occupancy.iter().map(|o| o.occupied).sum::<usize>(), 1);
    }

    #[test]
    fn admit_parks_or_leaves_nothing_behind() {
        let (mut d, _) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let admit = |plate: &str| Command::Admit {
            plate: plate.into(),
            vehicle_type: VehicleType::Car,
        };

        match d.dispatch(admit("CAR1")).unwrap() {
            CommandOutcome::Admitted(admission) => {
                assert_eq!(admission.ticket.number, 1);
                assert_eq!(admission.spot_number, 2);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        assert!(matches!(
            d.dispatch(admit("CAR2")),
            Err(DomainError::NoSpotAvailable { .. })
        ));
        assert!(d.lot().active_ticket_for_plate("CAR2").is_none());
        // Retrying is not mistaken for a duplicate.
        assert!(matches!(
            d.dispatch(admit("CAR2")),
            Err(DomainError::NoSpotAvailable { .. })
        ));
        assert_eq!(d.lot().active_tickets().count(), 1);
    }

    #[test]
    fn second_car_cannot_park() {
        let (mut d, _) = dispatcher_with(Box::new(AcceptingProcessor::default()));
        let first = issue(&mut d, "CAR1", VehicleType::Car);
        d.dispatch(Command::Park { ticket: first }).unwrap();
        let second = issue(&mut d, "CAR2", VehicleType::Car);
        assert!(matches!(
            d.dispatch(Command::Park { ticket: second }),
            Err(DomainError::NoSpotAvailable { .. })
        ));
    }
}
