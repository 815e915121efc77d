//! Tariff domain entity

use chrono::Duration;

/// Flat hourly tariff, applied to every vehicle class.
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    /// Price per hour parked, in major currency units
    pub hourly_rate: f64,
    /// Currency code (ISO 4217)
    pub currency: String,
}

impl Tariff {
    pub fn new(hourly_rate: f64, currency: impl Into<String>) -> Self {
        Self {
            hourly_rate,
            currency: currency.into(),
        }
    }

    /// Fee for a stay of the given length.
    ///
    /// Hours are fractional (no rounding up to whole hours). Negative
    /// durations are billed as zero.
    pub fn fee_for(&self, elapsed: Duration) -> f64 {
        let millis = elapsed.num_milliseconds().max(0);
        let hours = millis as f64 / 3_600_000.0;
        hours * self.hourly_rate
    }

    /// Format an amount as human-readable string
    pub fn format_cost(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.currency)
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::new(10.0, "USD")
    }
}

// ── Tests ──────────────────────────────────────────────────────
