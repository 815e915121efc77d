//! Configuration module
//!
//! Settings are read from a TOML file (default
//! `~/.config/texnouz-parking/config.toml`). Every section and field is
//! optional and falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::domain::{LotLayout, Tariff};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("texnouz-parking")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub lot: LotConfig,
    #[validate(nested)]
    pub tariff: TariffConfig,
    #[validate(nested)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_capacity"))]
pub struct LotConfig {
    #[validate(range(max = 10_000))]
    pub small_spots: u32,
    #[validate(range(max = 10_000))]
    pub medium_spots: u32,
    #[validate(range(max = 10_000))]
    pub large_spots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        let layout = LotLayout::default();
        Self {
            small_spots: layout.small,
            medium_spots: layout.medium,
            large_spots: layout.large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TariffConfig {
    #[validate(
        range(min = 0.0, max = 1_000_000.0),
        custom(function = "validate_rate")
    )]
    pub hourly_rate: f64,
    #[validate(length(min = 1, max = 8))]
    pub currency: String,
}

impl Default for TariffConfig {
    fn default() -> Self {
        let tariff = Tariff::default();
        Self {
            hourly_rate: tariff.hourly_rate,
            currency: tariff.currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace | debug | info | warn | error, or a full `EnvFilter` directive
    #[validate(length(min = 1))]
    pub level: String,
    /// text | json
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

fn validate_capacity(lot: &LotConfig) -> Result<(), ValidationError> {
    if u64::from(lot.small_spots) + u64::from(lot.medium_spots) + u64::from(lot.large_spots) == 0 {
        return Err(ValidationError::new("lot_has_no_spots"));
    }
    Ok(())
}

// NaN compares false against both range bounds.
fn validate_rate(rate: f64) -> Result<(), ValidationError> {
    if !rate.is_finite() {
        return Err(ValidationError::new("rate_not_finite"));
    }
    Ok(())
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format.to_lowercase().as_str() {
        "text" | "json" => Ok(()),
        _ => Err(ValidationError::new("unknown_log_format")),
    }
}

impl AppConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.ensure_valid()?;
        Ok(config)
    }

    /// Re-run validation, e.g. after command-line overrides.
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        self.validate()?;
        Ok(())
    }

    pub fn layout(&self) -> LotLayout {
        LotLayout::new(
            self.lot.small_spots,
            self.lot.medium_spots,
            self.lot.large_spots,
        )
    }

    pub fn tariff(&self) -> Tariff {
        Tariff::new(self.tariff.hourly_rate, self.tariff.currency.clone())
    }
}
