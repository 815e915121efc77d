//! # Texnouz Parking
//!
//! In-memory parking lot management: spot allocation, ticketing, hourly fees
//! and payments, operated from a numbered console menu.
//!
//! ## Architecture
//!
//! - **domain**: Vehicles, spots, tickets, tariffs and the domain error taxonomy
//! - **application**: The parking lot, payment processing and command dispatch
//! - **interfaces**: Console front desk (menu, rendering, input loop)
//! - **shared**: Clock, time formatting, application-level errors
//! - **config** / **bootstrap**: TOML configuration, logging and wiring

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use application::{CommandDispatcher, ParkingLot};
pub use bootstrap::{build_dispatcher, init_tracing, run_console};
pub use shared::errors::AppError;
