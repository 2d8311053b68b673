//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! error messages than standard assertions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_underwriting::{UnderwritingDecision, UnderwritingResult};

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than
/// tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts the result carries the expected decision
pub fn assert_decision(result: &UnderwritingResult, expected: UnderwritingDecision) {
    assert_eq!(
        result.decision, expected,
        "Expected decision {:?}, got {:?} (risk class {:?}, medical class {:?}, justification {:?})",
        expected,
        result.decision,
        result.risk_class,
        result.medical_assessment.risk_class,
        result.financial_assessment.justification
    );
}

/// Asserts the premium respects the 100.00 minimum
pub fn assert_premium_floor(result: &UnderwritingResult) {
    assert!(
        result.premium.amount() >= dec!(100.00),
        "Premium {} is below the minimum of 100.00",
        result.premium
    );
}

/// Asserts every expected rating category is present in the result
pub fn assert_all_rating_categories(result: &UnderwritingResult) {
    use domain_underwriting::RatingCategory::*;
    for category in [Medical, Financial, Occupation, Lifestyle, Geographic] {
        assert!(
            result.rating_factors.get(category).is_some(),
            "Missing rating factor for category {category}"
        );
    }
}
