use serde::{Deserialize, Serialize};

use crate::seat::Seat;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Tax share of the base fare
    pub tax_rate: f64,

    /// Flat booking fee per ticket
    pub booking_fee: i32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.15,
            booking_fee: 25,
        }
    }
}

impl PricingConfig {
    /// Tax rate must be a finite share within 0..=1 and the fee non-negative
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.tax_rate.is_finite() || !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(PricingError::InvalidTaxRate(self.tax_rate));
        }
        if self.booking_fee < 0 {
            return Err(PricingError::InvalidBookingFee(self.booking_fee));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Tax rate must be within 0..=1, got {0}")]
    InvalidTaxRate(f64),

    #[error("Booking fee must not be negative, got {0}")]
    InvalidBookingFee(i32),
}

/// Itemized price shown on the summary step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_fare: i32,
    pub taxes: i32,
    pub fees: i32,
    pub total: i32,
}

/// Seat pricing: base fare + rounded taxes + flat fee
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Taxes on a base fare, rounded half away from zero
    pub fn taxes(&self, base_fare: i32) -> i32 {
        (base_fare as f64 * self.config.tax_rate).round() as i32
    }

    pub fn quote(&self, seat: &Seat) -> PriceBreakdown {
        let taxes = self.taxes(seat.price);
        let fees = self.config.booking_fee;

        PriceBreakdown {
            base_fare: seat.price,
            taxes,
            fees,
            total: seat.price.saturating_add(taxes).saturating_add(fees),
        }
    }
}
