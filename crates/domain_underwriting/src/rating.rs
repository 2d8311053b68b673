//! Risk aggregation and rating factors
//!
//! Combines the medical and financial assessments with occupation,
//! lifestyle, and geographic dimensions into a multiplicative rating factor
//! map and an overall risk classification.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::application::{AlcoholUse, ExerciseLevel, InsuranceApplication};
use crate::financial::FinancialAssessment;
use crate::medical::MedicalAssessment;
use crate::tables;

/// Rating factor categories
///
/// One entry per disjoint input dimension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingCategory {
    Medical,
    Financial,
    Occupation,
    Lifestyle,
    Geographic,
}

impl RatingCategory {
    /// Returns the category name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingCategory::Medical => "MEDICAL",
            RatingCategory::Financial => "FINANCIAL",
            RatingCategory::Occupation => "OCCUPATION",
            RatingCategory::Lifestyle => "LIFESTYLE",
            RatingCategory::Geographic => "GEOGRAPHIC",
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map of rating category to multiplicative premium factor
///
/// Factors compose by multiplication, which is commutative, so the product
/// is invariant to iteration order. Nothing in the engine may depend on
/// entry ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingFactorMap {
    factors: BTreeMap<RatingCategory, Decimal>,
}

impl RatingFactorMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a factor for a category
    pub fn insert(&mut self, category: RatingCategory, factor: Decimal) {
        self.factors.insert(category, factor);
    }

    /// Returns the factor for a category, if present
    pub fn get(&self, category: RatingCategory) -> Option<Decimal> {
        self.factors.get(&category).copied()
    }

    /// Returns the product of all factors
    pub fn product(&self) -> Decimal {
        self.factors.values().product()
    }

    /// Iterates over (category, factor) pairs
    pub fn iter(&self) -> impl Iterator<Item = (RatingCategory, Decimal)> + '_ {
        self.factors.iter().map(|(c, f)| (*c, *f))
    }

    /// Returns the number of factors
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns true if no factors are present
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Overall risk classification from the composed factor product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskClass {
    /// Product below 0.90
    Preferred,
    /// Product up to 1.10
    Standard,
    /// Product up to 2.00
    Substandard,
    /// Product above 2.00 (sentinel factors land here)
    Declined,
}

impl RiskClass {
    /// Classifies a composed factor product
    pub fn from_factor_product(product: Decimal) -> Self {
        if product < dec!(0.90) {
            RiskClass::Preferred
        } else if product <= dec!(1.10) {
            RiskClass::Standard
        } else if product <= dec!(2.00) {
            RiskClass::Substandard
        } else {
            RiskClass::Declined
        }
    }
}

/// Result of risk aggregation
///
/// Immutable once produced; feeds premium calculation and decisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Composed rating factors, one per dimension
    pub rating_factors: RatingFactorMap,
    /// Product of all rating factors
    pub overall_risk_score: Decimal,
    /// Classification of the product
    pub overall_risk_class: RiskClass,
    /// Advisory notes; never consumed by the decision rules
    pub notes: Vec<String>,
}

/// Aggregates assessments into a rating factor map
///
/// Stateless; safe to share across threads.
#[derive(Debug, Default)]
pub struct RiskAggregator;

impl RiskAggregator {
    /// Creates a new aggregator
    pub fn new() -> Self {
        Self
    }

    /// Builds the rating factor map and overall classification
    ///
    /// Each factor is computed from a disjoint input dimension: medical
    /// class, financial justification, occupation, lifestyle, and state of
    /// residence. Declined classifications contribute their sentinel factor
    /// so the audit trail stays complete; the decision engine branches on
    /// the typed classifications, never on the sentinel's numeric value.
    pub fn aggregate(
        &self,
        application: &InsuranceApplication,
        medical: &MedicalAssessment,
        financial: &FinancialAssessment,
    ) -> RiskAssessment {
        let mut factors = RatingFactorMap::new();

        factors.insert(RatingCategory::Medical, medical.risk_class.rating_factor());
        factors.insert(
            RatingCategory::Financial,
            financial.justification.rating_factor(),
        );
        factors.insert(
            RatingCategory::Occupation,
            tables::occupation_factor(&application.occupation),
        );
        factors.insert(
            RatingCategory::Lifestyle,
            lifestyle_factor(application),
        );
        factors.insert(
            RatingCategory::Geographic,
            tables::geographic_factor(&application.residence_state),
        );

        let product = factors.product();

        RiskAssessment {
            overall_risk_class: RiskClass::from_factor_product(product),
            overall_risk_score: product,
            notes: risk_notes(medical, financial),
            rating_factors: factors,
        }
    }
}

/// Lifestyle factor: independent, compounding adjustments
fn lifestyle_factor(application: &InsuranceApplication) -> Decimal {
    let lifestyle = &application.medical.lifestyle;
    let mut factor = dec!(1.00);

    if lifestyle.alcohol_use == AlcoholUse::Heavy {
        factor *= dec!(1.15);
    }
    if lifestyle.has_hazardous_activities() {
        factor *= dec!(1.10);
    }
    if lifestyle.exercise == ExerciseLevel::Regular {
        factor *= dec!(0.95);
    }

    factor
}

/// Advisory flags surfaced alongside the assessment
fn risk_notes(medical: &MedicalAssessment, financial: &FinancialAssessment) -> Vec<String> {
    let mut notes = Vec::new();

    if medical.risk_score > 50 {
        notes.push(format!(
            "Elevated medical risk score: {}",
            medical.risk_score
        ));
    }
    if financial.debt_to_income_ratio > dec!(0.40) {
        notes.push(format!(
            "High debt-to-income ratio: {}",
            financial.debt_to_income_ratio
        ));
    }
    if financial.additional_documentation_required {
        notes.push("Additional financial documentation required".to_string());
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_product_is_order_independent() {
        let mut forward = RatingFactorMap::new();
        forward.insert(RatingCategory::Medical, dec!(0.95));
        forward.insert(RatingCategory::Occupation, dec!(1.50));
        forward.insert(RatingCategory::Geographic, dec!(1.05));

        let mut reverse = RatingFactorMap::new();
        reverse.insert(RatingCategory::Geographic, dec!(1.05));
        reverse.insert(RatingCategory::Occupation, dec!(1.50));
        reverse.insert(RatingCategory::Medical, dec!(0.95));

        assert_eq!(forward.product(), reverse.product());
    }

    #[test]
    fn test_empty_map_product_is_one() {
        assert_eq!(RatingFactorMap::new().product(), dec!(1));
    }

    #[test]
    fn test_risk_class_thresholds() {
        assert_eq!(
            RiskClass::from_factor_product(dec!(0.85)),
            RiskClass::Preferred
        );
        assert_eq!(
            RiskClass::from_factor_product(dec!(0.90)),
            RiskClass::Standard
        );
        assert_eq!(
            RiskClass::from_factor_product(dec!(1.10)),
            RiskClass::Standard
        );
        assert_eq!(
            RiskClass::from_factor_product(dec!(1.11)),
            RiskClass::Substandard
        );
        assert_eq!(
            RiskClass::from_factor_product(dec!(2.00)),
            RiskClass::Substandard
        );
        assert_eq!(
            RiskClass::from_factor_product(dec!(2.01)),
            RiskClass::Declined
        );
    }

    #[test]
    fn test_rating_map_serializes_by_category_name() {
        let mut map = RatingFactorMap::new();
        map.insert(RatingCategory::Medical, dec!(0.95));

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("MEDICAL"), "unexpected JSON: {json}");
    }
}
