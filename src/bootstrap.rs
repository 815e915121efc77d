//! Process wiring: logging setup and building the front desk from config.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::info;

use crate::application::commands::CommandDispatcher;
use crate::application::parking::{AcceptingProcessor, ParkingLot};
use crate::config::{AppConfig, LoggingConfig};
use crate::interfaces::console::Console;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::errors::AppError;

/// Initialize tracing (logging) from the logging config.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so it does not interleave with the console menu on stdout. Call
/// this once at process startup.
pub fn init_tracing(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    match config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Build the lot and dispatcher described by `config`.
pub fn build_dispatcher(config: &AppConfig, clock: Arc<dyn Clock>) -> CommandDispatcher {
    let tariff = config.tariff();
    let lot = ParkingLot::new(config.layout(), tariff.clone(), clock);
    CommandDispatcher::new(lot, Box::new(AcceptingProcessor::new(tariff)))
}

/// Run the interactive front desk until Quit or end of input.
pub fn run_console<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let dispatcher = build_dispatcher(config, Arc::new(SystemClock));
    let mut console = Console::new(dispatcher, input, output);
    info!("Front desk open");
    console.run()?;
    info!("Front desk closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::application::commands::{Command, CommandOutcome};
    use crate::domain::VehicleType;
    use crate::shared::clock::ManualClock;

    #[test]
    fn dispatcher_follows_config() {
        let cfg = AppConfig::from_toml(
            "[lot]\nsmall_spots = 0\nmedium_spots = 1\nlarge_spots = 0\n[tariff]\nhourly_rate = 3.0\ncurrency = \"EUR\"\n",
        )
        .unwrap();
        let mut d = build_dispatcher(&cfg, Arc::new(ManualClock::default()));
        assert_eq!(d.lot().spots().len(), 1);
        assert_eq!(d.lot().tariff().currency, "EUR");

        let issued = d
            .dispatch(Command::IssueTicket {
                plate: "M1".into(),
                vehicle_type: VehicleType::Motorcycle,
            })
            .unwrap();
        let CommandOutcome::TicketIssued(ticket) = issued else {
            panic!("expected ticket");
        };
        assert!(d.dispatch(Command::Park { ticket: ticket.number }).is_err());
    }

    #[test]
    fn run_console_stops_at_end_of_input() {
        let mut out = Vec::new();
        run_console(&AppConfig::default(), Cursor::new(b"6\n".to_vec()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Small: 10 of 10 available"));
        assert!(text.contains("Exiting the system. Thank you!"));
    }
}
