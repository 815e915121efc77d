//! Texnouz Parking console front desk
//!
//! ```sh
//! # Run with default config (~/.config/texnouz-parking/config.toml)
//! parking-cli
//!
//! # Custom config path
//! parking-cli --config /etc/texnouz-parking/config.toml
//!
//! # Override the lot layout and rate
//! parking-cli --small 4 --medium 8 --large 2 --rate 12.5
//!
//! # Validate config without starting
//! parking-cli --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use texnouz_parking::config::AppConfig;
use texnouz_parking::{init_tracing, run_console};

/// Texnouz Parking: issue tickets, park vehicles, take payments.
#[derive(Parser, Debug)]
#[command(
    name = "parking-cli",
    version,
    about = "Parking lot front desk",
    long_about = "Texnouz Parking interactive console for issuing parking tickets, \
                  allocating spots and collecting hourly fees.\n\n\
                  Default config: ~/.config/texnouz-parking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the number of small spots.
    #[arg(long)]
    small: Option<u32>,

    /// Override the number of medium spots.
    #[arg(long)]
    medium: Option<u32>,

    /// Override the number of large spots.
    #[arg(long)]
    large: Option<u32>,

    /// Override the hourly rate.
    #[arg(long)]
    rate: Option<f64>,

    /// Validate the configuration and exit without opening the front desk.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(texnouz_parking::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(small) = cli.small {
        config.lot.small_spots = small;
    }
    if let Some(medium) = cli.medium {
        config.lot.medium_spots = medium;
    }
    if let Some(large) = cli.large {
        config.lot.large_spots = large;
    }
    if let Some(rate) = cli.rate {
        config.tariff.hourly_rate = rate;
    }

    init_tracing(&config.logging);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) if e.is_not_found() && cli.config.is_none() => {
            info!("No config file at {}, using defaults", config_path.display())
        }
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    // Overrides can make an otherwise valid config invalid.
    if let Err(e) = config.ensure_valid() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!(
            "   Spots       : {} small, {} medium, {} large",
            config.lot.small_spots, config.lot.medium_spots, config.lot.large_spots
        );
        println!(
            "   Tariff      : {}/hour",
            config.tariff().format_cost(config.tariff.hourly_rate)
        );
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Open the front desk ────────────────────────────────────
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_console(&config, stdin.lock(), stdout.lock())?;

    Ok(())
}
