//! Interactive console loop.
//!
//! Reads menu choices and their arguments line by line, turns them into
//! [`Command`]s and prints whatever the dispatcher answers. Errors are shown
//! and the loop carries on; only Quit or end of input stops it.

use std::io::{BufRead, Write};

use tracing::debug;

use super::menu::{self, MenuAction};
use super::render;
use crate::application::commands::{Command, CommandDispatcher, CommandOutcome};
use crate::domain::{DomainError, TicketNumber, VehicleType};
use crate::shared::errors::AppError;

enum Step {
    Run(Command),
    Invalid(DomainError),
    EndOfInput,
}

pub struct Console<R, W> {
    dispatcher: CommandDispatcher,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(dispatcher: CommandDispatcher, input: R, output: W) -> Self {
        Self {
            dispatcher,
            input,
            output,
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            write!(self.output, "{}", render::menu())?;
            let step = match self.prompt("Enter your choice: ")? {
                None => Step::EndOfInput,
                Some(line) => match menu::parse_choice(&line) {
                    Ok(action) => self.build_command(action)?,
                    Err(e) => Step::Invalid(e),
                },
            };

            let command = match step {
                Step::Run(command) => command,
                Step::Invalid(e) => {
                    writeln!(self.output, "Error: {}", e)?;
                    continue;
                }
                Step::EndOfInput => Command::Quit,
            };

            debug!(command = command.name(), "Dispatching");
            match self.dispatcher.dispatch(command) {
                Ok(outcome) => {
                    let text = render::outcome(&outcome, self.dispatcher.lot().tariff());
                    writeln!(self.output, "{}", text)?;
                    if outcome == CommandOutcome::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn build_command(&mut self, action: MenuAction) -> Result<Step, AppError> {
        let step = match action {
            MenuAction::IssueTicket => self.vehicle_step(|plate, vehicle_type| {
                Command::IssueTicket {
                    plate,
                    vehicle_type,
                }
            })?,
            MenuAction::Admit => self.vehicle_step(|plate, vehicle_type| Command::Admit {
                plate,
                vehicle_type,
            })?,
            MenuAction::ViewTickets => Step::Run(Command::ViewTickets),
            MenuAction::AvailableSpots => Step::Run(Command::AvailableSpots),
            MenuAction::Quit => Step::Run(Command::Quit),
            MenuAction::Park => self.ticket_step(|ticket| Command::Park { ticket })?,
            MenuAction::Exit => self.ticket_step(|ticket| Command::Exit { ticket })?,
            MenuAction::Pay => self.ticket_step(|ticket| Command::Pay { ticket })?,
            MenuAction::ReportLost => self.ticket_step(|ticket| Command::ReportLost { ticket })?,
        };
        Ok(step)
    }

    fn vehicle_step(
        &mut self,
        make: impl FnOnce(String, VehicleType) -> Command,
    ) -> Result<Step, AppError> {
        let Some(plate) = self.prompt("Enter license plate number: ")? else {
            return Ok(Step::EndOfInput);
        };
        let Some(index) = self.prompt("Enter vehicle type (0: Motorcycle, 1: Car, 2: Truck): ")?
        else {
            return Ok(Step::EndOfInput);
        };
        Ok(match menu::parse_vehicle_type(&index) {
            Ok(vehicle_type) => Step::Run(make(plate, vehicle_type)),
            Err(e) => Step::Invalid(e),
        })
    }

    fn ticket_step(
        &mut self,
        make: impl FnOnce(TicketNumber) -> Command,
    ) -> Result<Step, AppError> {
        let Some(line) = self.prompt("Enter ticket number: ")? else {
            return Ok(Step::EndOfInput);
        };
        Ok(match menu::parse_ticket_number(&line) {
            Ok(ticket) => Step::Run(make(ticket)),
            Err(e) => Step::Invalid(e),
        })
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use crate::application::parking::{AcceptingProcessor, ParkingLot};
    use crate::domain::{LotLayout, Tariff};
    use crate::shared::clock::ManualClock;

    fn run_script(script: &str) -> (String, Console<Cursor<Vec<u8>>, Vec<u8>>) {
        let clock = Arc::new(ManualClock::default());
        let lot = ParkingLot::new(LotLayout::new(1, 1, 1), Tariff::default(), clock);
        let dispatcher = CommandDispatcher::new(lot, Box::new(AcceptingProcessor::default()));
        let mut console = Console::new(
            dispatcher,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        console.run().unwrap();
        let output = String::from_utf8(console.output.clone()).unwrap();
        (output, console)
    }

    #[test]
    fn issue_park_pay_exit_session() {
        let (out, console) = run_script("1\nABC123\n1\n3\n1\n5\n1\n4\n1\n0\n");
        assert!(out.contains("Ticket 1 issued for Car ABC123"));
        assert!(out.contains("Vehicle ABC123 parked at spot 2 (ticket 1)"));
        assert!(out.contains("Ticket 1 paid: 0.00 USD"));
        assert!(out.contains("Vehicle ABC123 exited from spot 2."));
        assert!(out.trim_end().ends_with("Exiting the system. Thank you!"));
        assert_eq!(console.dispatcher().lot().active_tickets().count(), 0);
    }

    #[test]
    fn bad_input_is_reported_and_loop_continues() {
        let (out, _) = run_script("9\n1\nXYZ\n7\n4\nabc\n2\n0\n");
        assert!(out.contains("Error: Invalid input: '9' is not a menu choice"));
        assert!(out.contains("Error: Invalid input: vehicle type must be 0"));
        assert!(out.contains("Error: Invalid input: 'abc' is not a ticket number"));
        assert!(out.contains("No active tickets."));
    }

    #[test]
    fn domain_errors_do_not_stop_the_loop() {
        let (out, _) = run_script("1\nCAR1\n1\n1\nCAR1\n1\n4\n1\n3\n42\n0\n");
        assert!(out.contains("Error: Vehicle CAR1 already has active ticket 1"));
        assert!(out.contains("Error: Invalid ticket 1: payment is required before exiting"));
        assert!(out.contains("Error: Invalid ticket 42: no such active ticket"));
        assert!(out.contains("Exiting the system. Thank you!"));
    }

    #[test]
    fn admit_on_a_full_lot_leaves_no_ticket() {
        let (out, console) = run_script("8\nCAR1\n1\n8\nCAR2\n1\n8\nCAR2\n1\n2\n0\n");
        assert!(out.contains("Ticket 1 issued for Car CAR1 and parked at spot 2"));
        assert_eq!(out.matches("Error: No Medium spot available for Car CAR2").count(), 2);
        assert!(!out.contains("already has active ticket"));

        let lot = console.dispatcher().lot();
        assert_eq!(lot.active_tickets().count(), 1);
        assert!(lot.active_ticket_for_plate("CAR2").is_none());
    }

    #[test]
    fn end_of_input_quits() {
        let (out, _) = run_script("2\n");
        assert!(out.contains("No active tickets."));
        assert!(out.trim_end().ends_with("Exiting the system. Thank you!"));
    }

    #[test]
    fn end_of_input_mid_prompt_quits() {
        let (out, console) = run_script("1\nABC123\n");
        assert!(out.contains("Exiting the system. Thank you!"));
        assert_eq!(console.dispatcher().lot().active_tickets().count(), 0);
    }
}
