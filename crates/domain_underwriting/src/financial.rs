//! Financial capacity evaluation
//!
//! Determines how much coverage an applicant's income and net worth can
//! justify, categorizes the requested amount, and rates financial stability
//! from debt, liquidity, and credit score.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::application::FinancialProfile;
use crate::error::UnderwritingError;

/// Financial rationale bucket for the requested coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageJustification {
    /// Within the income-derived maximum
    IncomeReplacement,
    /// Within the net-worth-derived maximum
    EstatePlanning,
    /// Within the overall recommended maximum
    BusinessProtection,
    /// Exceeds every derived maximum
    InsufficientJustification,
}

impl CoverageJustification {
    /// Returns the rating factor for this justification
    ///
    /// The insufficient value is a sentinel kept for the audit trail;
    /// decisions branch on the justification itself.
    pub fn rating_factor(&self) -> Decimal {
        match self {
            CoverageJustification::IncomeReplacement => dec!(1.00),
            CoverageJustification::EstatePlanning => dec!(1.05),
            CoverageJustification::BusinessProtection => dec!(1.10),
            CoverageJustification::InsufficientJustification => dec!(999.99),
        }
    }
}

/// Financial stability rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityRating {
    /// Score 30 or above
    Excellent,
    /// Score 15 or above
    Good,
    /// Score 0 or above
    Fair,
    /// Below 0
    Poor,
}

impl StabilityRating {
    /// Classifies a stability score
    pub fn from_score(score: i32) -> Self {
        if score >= 30 {
            StabilityRating::Excellent
        } else if score >= 15 {
            StabilityRating::Good
        } else if score >= 0 {
            StabilityRating::Fair
        } else {
            StabilityRating::Poor
        }
    }
}

/// Result of financial capacity evaluation
///
/// Immutable once produced; passed forward to aggregation and decisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialAssessment {
    /// Maximum coverage justified by income
    pub max_coverage_by_income: Decimal,
    /// Maximum coverage justified by net worth
    pub max_coverage_by_net_worth: Decimal,
    /// Overall recommended maximum (greater of the two)
    pub max_recommended_coverage: Decimal,
    /// Justification category for the requested amount
    pub justification: CoverageJustification,
    /// Debt-to-income ratio (4 decimal places, half-up)
    pub debt_to_income_ratio: Decimal,
    /// Liquid assets over a year of expenses (4 decimal places, half-up)
    pub liquidity_ratio: Decimal,
    /// Accumulated stability score
    pub stability_score: i32,
    /// Stability rating derived from the score
    pub stability_rating: StabilityRating,
    /// Whether the request exceeds the recommended maximum
    pub additional_documentation_required: bool,
}

/// Evaluates financial capacity
///
/// Stateless; safe to share across threads.
#[derive(Debug, Default)]
pub struct FinancialCapacityEvaluator;

impl FinancialCapacityEvaluator {
    /// Creates a new evaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a financial profile against a requested coverage amount
    ///
    /// # Errors
    ///
    /// Returns [`UnderwritingError::InvalidInput`] if annual income or
    /// monthly expenses are not positive. The ratios below divide by both,
    /// so this contract is enforced before any arithmetic.
    pub fn evaluate(
        &self,
        profile: &FinancialProfile,
        requested_coverage: Money,
    ) -> Result<FinancialAssessment, UnderwritingError> {
        if profile.annual_income <= Decimal::ZERO {
            return Err(UnderwritingError::invalid_input(
                "Annual income must be positive",
            ));
        }
        if profile.monthly_expenses <= Decimal::ZERO {
            return Err(UnderwritingError::invalid_input(
                "Monthly expenses must be positive",
            ));
        }

        let max_by_income = profile.annual_income * income_multiplier(profile.annual_income);
        let max_by_net_worth = profile.net_worth * dec!(0.25);
        let max_recommended = max_by_income.max(max_by_net_worth);

        let requested = requested_coverage.amount();
        let justification = if requested <= max_by_income {
            CoverageJustification::IncomeReplacement
        } else if requested <= max_by_net_worth {
            CoverageJustification::EstatePlanning
        } else if requested <= max_recommended {
            CoverageJustification::BusinessProtection
        } else {
            CoverageJustification::InsufficientJustification
        };

        let debt_to_income = round_ratio(profile.total_debt / profile.annual_income);
        let liquidity =
            round_ratio(profile.liquid_assets / (profile.monthly_expenses * dec!(12)));

        let stability_score = stability_score(debt_to_income, liquidity, profile.credit_score);

        Ok(FinancialAssessment {
            max_coverage_by_income: max_by_income,
            max_coverage_by_net_worth: max_by_net_worth,
            max_recommended_coverage: max_recommended,
            justification,
            debt_to_income_ratio: debt_to_income,
            liquidity_ratio: liquidity,
            stability_score,
            stability_rating: StabilityRating::from_score(stability_score),
            additional_documentation_required: requested > max_recommended,
        })
    }
}

/// Income multiplier by income band
fn income_multiplier(annual_income: Decimal) -> Decimal {
    if annual_income < dec!(50000) {
        dec!(10)
    } else if annual_income < dec!(100000) {
        dec!(15)
    } else if annual_income < dec!(250000) {
        dec!(20)
    } else if annual_income < dec!(500000) {
        dec!(25)
    } else {
        dec!(30)
    }
}

/// Rounds a ratio to 4 decimal places, half-up
fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Accumulates the stability score from debt, liquidity, and credit bands
fn stability_score(debt_to_income: Decimal, liquidity: Decimal, credit_score: u16) -> i32 {
    let mut score = 0;

    score += if debt_to_income < dec!(0.20) {
        20
    } else if debt_to_income < dec!(0.36) {
        10
    } else if debt_to_income < dec!(0.50) {
        0
    } else {
        -10
    };

    score += if liquidity > dec!(1.0) {
        15
    } else if liquidity > dec!(0.5) {
        10
    } else if liquidity > dec!(0.25) {
        5
    } else {
        -5
    };

    score += if credit_score >= 800 {
        15
    } else if credit_score >= 740 {
        10
    } else if credit_score >= 670 {
        5
    } else if credit_score >= 580 {
        0
    } else {
        -10
    };

    score
}
