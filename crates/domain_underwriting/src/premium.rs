//! Premium calculation
//!
//! Applies the composed rating factors to a base annual rate of 1.0 per
//! 1000 of coverage. The result is floored at the minimum premium and
//! rounded half-up to cents.

use rust_decimal_macros::dec;

use core_kernel::{Money, Rate};

use crate::rating::RatingFactorMap;

/// Base annual rate per 1000 of coverage
const BASE_RATE_PER_MILLE: rust_decimal::Decimal = dec!(1.0);

/// Minimum annual premium
const MINIMUM_PREMIUM: rust_decimal::Decimal = dec!(100);

/// Calculates premiums from coverage and rating factors
///
/// Stateless; safe to share across threads.
#[derive(Debug, Default)]
pub struct PremiumCalculator;

impl PremiumCalculator {
    /// Creates a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Calculates the annual premium for a coverage amount
    ///
    /// Multiplication by the rating factors is order-independent. Sentinel
    /// factors from declined classifications produce an enormous premium;
    /// the decision engine short-circuits on the classification before such
    /// a premium reaches a customer-facing path, but the value is still
    /// computed for audit completeness.
    pub fn calculate(&self, coverage: Money, factors: &RatingFactorMap) -> Money {
        let base = Rate::from_per_mille(BASE_RATE_PER_MILLE).apply(&coverage);

        let mut premium = base;
        for (_, factor) in factors.iter() {
            premium = premium.multiply(factor);
        }

        let floor = Money::new(MINIMUM_PREMIUM, coverage.currency());
        premium.max(&floor).round_half_up()
    }
}
