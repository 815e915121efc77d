//! Menu table and input parsing for the console front desk.

use crate::domain::{DomainError, DomainResult, TicketNumber, VehicleType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    IssueTicket,
    Admit,
    ViewTickets,
    Park,
    Exit,
    Pay,
    AvailableSpots,
    ReportLost,
    Quit,
}

pub struct MenuEntry {
    pub key: u32,
    pub label: &'static str,
    pub action: MenuAction,
}

/// Menu shown on every loop, in display order.
pub const MENU: &[MenuEntry] = &[
    MenuEntry { key: 1, label: "Issue ticket", action: MenuAction::IssueTicket },
    MenuEntry { key: 2, label: "View tickets", action: MenuAction::ViewTickets },
    MenuEntry { key: 3, label: "Park vehicle", action: MenuAction::Park },
    MenuEntry { key: 4, label: "Exit vehicle", action: MenuAction::Exit },
    MenuEntry { key: 5, label: "Pay ticket", action: MenuAction::Pay },
    MenuEntry { key: 6, label: "Available spots", action: MenuAction::AvailableSpots },
    MenuEntry { key: 7, label: "Report lost ticket", action: MenuAction::ReportLost },
    MenuEntry { key: 8, label: "Admit vehicle (issue and park)", action: MenuAction::Admit },
    MenuEntry { key: 0, label: "Quit", action: MenuAction::Quit },
];

pub fn parse_choice(input: &str) -> DomainResult<MenuAction> {
    let input = input.trim();
    input
        .parse::<u32>()
        .ok()
        .and_then(|key| MENU.iter().find(|e| e.key == key))
        .map(|e| e.action)
        .ok_or_else(|| {
            DomainError::InvalidInput(format!("'{}' is not a menu choice", input))
        })
}

/// Parse the vehicle type index (0: Motorcycle, 1: Car, 2: Truck).
pub fn parse_vehicle_type(input: &str) -> DomainResult<VehicleType> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(VehicleType::from_index)
        .ok_or_else(|| {
            DomainError::InvalidInput(
                "vehicle type must be 0 (Motorcycle), 1 (Car), or 2 (Truck)".to_string(),
            )
        })
}

pub fn parse_ticket_number(input: &str) -> DomainResult<TicketNumber> {
    let input = input.trim();
    input.parse::<TicketNumber>().map_err(|_| {
        DomainError::InvalidInput(format!("'{}' is not a ticket number", input))
    })
}
