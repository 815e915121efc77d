//! Payment processing

use tracing::info;

use crate::domain::{DomainError, DomainResult, Tariff};

/// Takes payment for a parking fee.
pub trait PaymentProcessor: Send + Sync {
    fn process_payment(&self, amount: f64) -> DomainResult<()>;
}

/// Accepts every payment. Only malformed amounts are refused.
#[derive(Debug, Clone, Default)]
pub struct AcceptingProcessor {
    tariff: Tariff,
}

impl AcceptingProcessor {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }
}

impl PaymentProcessor for AcceptingProcessor {
    fn process_payment(&self, amount: f64) -> DomainResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::PaymentDeclined {
                amount,
                reason: "amount must be a non-negative number".to_string(),
            });
        }
        info!("Processing payment of {}", self.tariff.format_cost(amount));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_valid_amount() {
        let p = AcceptingProcessor::default();
        assert!(p.process_payment(0.0).is_ok());
        assert!(p.process_payment(20.0).is_ok());
        assert!(p.process_payment(1e9).is_ok());
    }

    #[test]
    fn refuses_malformed_amounts() {
        let p = AcceptingProcessor::default();
        assert!(matches!(
            p.process_payment(-1.0),
            Err(DomainError::PaymentDeclined { .. })
        ));
        assert!(p.process_payment(f64::NAN).is_err());
    }
}
