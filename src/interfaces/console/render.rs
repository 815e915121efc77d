//! Text rendering of menus and command outcomes.

use super::menu::MENU;
use crate::application::commands::{CommandOutcome, TicketSummary};
use crate::domain::Tariff;
use crate::shared::time::{format_duration, format_timestamp};

pub fn menu() -> String {
    let entries: Vec<String> = MENU
        .iter()
        .map(|entry| format!("{}. {}", entry.key, entry.label))
        .collect();
    format!("\nMenu:\n{}\n", entries.join("\n"))
}

pub fn outcome(outcome: &CommandOutcome, tariff: &Tariff) -> String {
    match outcome {
        CommandOutcome::TicketIssued(ticket) => format!(
            "Ticket {} issued for {} {} at {}",
            ticket.number,
            ticket.vehicle_type,
            ticket.plate,
            format_timestamp(ticket.entry_time())
        ),
        CommandOutcome::Admitted(admission) => format!(
            "Ticket {} issued for {} {} and parked at spot {} at {}",
            admission.ticket.number,
            admission.ticket.vehicle_type,
            admission.ticket.plate,
            admission.spot_number,
            format_timestamp(admission.ticket.entry_time())
        ),
        CommandOutcome::Tickets(rows) => tickets(rows, tariff),
        CommandOutcome::Parked {
            ticket,
            plate,
            spot_number,
        } => format!(
            "Vehicle {} parked at spot {} (ticket {})",
            plate, spot_number, ticket
        ),
        CommandOutcome::Paid { ticket, amount } => format!(
            "Ticket {} paid: {}",
            ticket.number,
            tariff.format_cost(*amount)
        ),
        CommandOutcome::Exited(receipt) => {
            let headline = match receipt.spot_number {
                Some(spot) => format!("Vehicle {} exited from spot {}.", receipt.ticket.plate, spot),
                None => format!("Vehicle {} exited.", receipt.ticket.plate),
            };
            [
                headline,
                format!("Start Time: {}", format_timestamp(receipt.entry_time)),
                format!("End Time: {}", format_timestamp(receipt.exit_time)),
                format!("Paid: {}", tariff.format_cost(receipt.amount_paid)),
            ]
            .join("\n")
        }
        CommandOutcome::AvailableSpots { spots, occupancy } => {
            let mut lines: Vec<String> = occupancy
                .iter()
                .map(|o| format!("{}: {} of {} available", o.size, o.available(), o.total))
                .collect();
            if spots.is_empty() {
                lines.push("No spots available.".to_string());
            }
            lines.extend(
                spots
                    .iter()
                    .map(|spot| format!("Spot {} ({}) is available.", spot.number, spot.size)),
            );
            lines.join("\n")
        }
        CommandOutcome::MarkedLost(ticket) => {
            format!("Ticket {} marked as lost.", ticket.number)
        }
        CommandOutcome::Quit => "Exiting the system. Thank you!".to_string(),
    }
}

fn tickets(rows: &[TicketSummary], tariff: &Tariff) -> String {
    if rows.is_empty() {
        return "No active tickets.".to_string();
    }
    rows.iter()
        .map(|t| {
            format!(
                "Ticket Number: {}, Vehicle License Plate: {}, Type: {}, Status: {}, Spot: {}, \
                 Entered: {}, Parked Duration: {}, Fee: {}",
                t.number,
                t.plate,
                t.vehicle_type,
                t.status,
                t.spot_number
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                format_timestamp(t.entry_time),
                format_duration(t.parked_for),
                tariff.format_cost(t.fee)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::application::parking::Occupancy;
    use crate::domain::{SpotSize, TicketStatus, VehicleType};

    #[test]
    fn menu_lists_every_entry() {
        let text = menu();
        assert!(text.contains("1. Issue ticket"));
        assert!(text.contains("5. Pay ticket"));
        assert!(text.contains("8. Admit vehicle (issue and park)"));
        assert!(text.contains("0. Quit"));
        assert!(text.ends_with("0. Quit\n"));
    }

    #[test]
    fn full_lot_lists_counts_only() {
        let occupancy = vec![Occupancy {
            size: SpotSize::Small,
            total: 1,
            occupied: 1,
        }];
        let text = outcome(
            &CommandOutcome::AvailableSpots {
                spots: Vec::new(),
                occupancy,
            },
            &Tariff::default(),
        );
        assert_eq!(text, "Small: 0 of 1 available\nNo spots available.");
    }

    #[test]
    fn ticket_row_shows_duration_and_fee() {
        let rows = vec![TicketSummary {
            number: 3,
            plate: "ABC123".into(),
            vehicle_type: VehicleType::Car,
            status: TicketStatus::Active,
            entry_time: Utc::now(),
            parked_for: Duration::minutes(125),
            spot_number: None,
            fee: 20.833,
        }];
        let text = outcome(&CommandOutcome::Tickets(rows), &Tariff::default());
        assert!(text.starts_with("Ticket Number: 3, Vehicle License Plate: ABC123"));
        assert!(text.contains("Spot: -"));
        assert!(text.contains("Parked Duration: 2 hours 5 minutes"));
        assert!(text.ends_with("Fee: 20.83 USD"));
    }

    #[test]
    fn empty_listing() {
        let text = outcome(&CommandOutcome::Tickets(Vec::new()), &Tariff::default());
        assert_eq!(text, "No active tickets.");
    }
}
