//! Application data model for underwriting
//!
//! The types in this module describe the fully-populated application an
//! external intake process hands to the engine. They are immutable inputs:
//! created once per evaluation, consumed once, never mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ApplicationId, Money};

use crate::error::UnderwritingError;

/// A life insurance application submitted for underwriting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceApplication {
    /// Application identifier assigned by intake
    pub id: ApplicationId,
    /// Applicant full name
    pub applicant_name: String,
    /// Applicant occupation (free text, normalized for lookup)
    pub occupation: String,
    /// Two-letter state of residence
    pub residence_state: String,
    /// Medical profile
    pub medical: MedicalProfile,
    /// Financial profile
    pub financial: FinancialProfile,
    /// Requested coverage amount
    pub requested_coverage: Money,
    /// Product code (e.g. TERM_LIFE_20)
    pub product_code: String,
}

impl InsuranceApplication {
    /// Validates the application against the engine's input contract
    ///
    /// The engine fails fast here so that every downstream component can be
    /// a total function. Non-positive income, monthly expenses, or requested
    /// coverage would otherwise poison the ratio math.
    pub fn validate(&self) -> Result<(), UnderwritingError> {
        if !self.requested_coverage.is_positive() {
            return Err(UnderwritingError::invalid_input(
                "Requested coverage must be positive",
            ));
        }
        if self.financial.annual_income <= Decimal::ZERO {
            return Err(UnderwritingError::invalid_input(
                "Annual income must be positive",
            ));
        }
        if self.financial.monthly_expenses <= Decimal::ZERO {
            return Err(UnderwritingError::invalid_input(
                "Monthly expenses must be positive",
            ));
        }
        Ok(())
    }
}

/// Medical profile of the applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalProfile {
    /// Age in years
    pub age: u32,
    /// Height in inches
    pub height_inches: f64,
    /// Weight in pounds
    pub weight_pounds: f64,
    /// Current smoker
    pub is_smoker: bool,
    /// Disclosed medical conditions
    pub conditions: Vec<MedicalCondition>,
    /// Family medical history
    pub family_history: Vec<FamilyHistoryEntry>,
    /// Lifestyle information
    pub lifestyle: LifestyleProfile,
}

impl MedicalProfile {
    /// Calculates BMI from imperial height and weight
    ///
    /// Conversions: 1 in = 0.0254 m, 1 lb = 0.453592 kg.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_inches * 0.0254;
        let weight_kg = self.weight_pounds * 0.453592;
        weight_kg / (height_m * height_m)
    }
}

/// A disclosed medical condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalCondition {
    /// Kind of condition
    pub kind: ConditionKind,
    /// Severity, where disclosed
    pub severity: Option<ConditionSeverity>,
    /// Years in remission (relevant for cancer)
    pub years_in_remission: u32,
}

impl MedicalCondition {
    /// Creates a condition with no severity or remission detail
    pub fn new(kind: ConditionKind) -> Self {
        Self {
            kind,
            severity: None,
            years_in_remission: 0,
        }
    }

    /// Creates a condition with a disclosed severity
    pub fn with_severity(kind: ConditionKind, severity: ConditionSeverity) -> Self {
        Self {
            kind,
            severity: Some(severity),
            years_in_remission: 0,
        }
    }

    /// Creates a cancer history entry with years in remission
    pub fn cancer_in_remission(years: u32) -> Self {
        Self {
            kind: ConditionKind::Cancer,
            severity: None,
            years_in_remission: years,
        }
    }
}

/// Recognized condition kinds
///
/// Conditions outside this set score through the catch-all variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    Diabetes,
    Hypertension,
    HeartDisease,
    Cancer,
    Other(String),
}

/// Severity of a disclosed condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionSeverity {
    /// Under control with treatment (diabetes)
    Controlled,
    /// Not under control (diabetes)
    Uncontrolled,
    /// Mild presentation (hypertension)
    Mild,
    /// Moderate presentation (hypertension)
    Moderate,
    /// Severe presentation (hypertension)
    Severe,
}

/// Family medical history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyHistoryEntry {
    /// Relationship to the applicant
    pub relationship: Relationship,
    /// Condition (free text, normalized for lookup)
    pub condition: String,
    /// Age of the relative at diagnosis
    pub age_at_diagnosis: Option<u32>,
}

/// Relationship of a family member to the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    Parent,
    Sibling,
    Grandparent,
    Other,
}

/// Lifestyle information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleProfile {
    /// Alcohol consumption level
    pub alcohol_use: AlcoholUse,
    /// Exercise frequency
    pub exercise: ExerciseLevel,
    /// Hazardous activities (free text, normalized for lookup)
    pub hazardous_activities: Vec<String>,
}

impl LifestyleProfile {
    /// A neutral lifestyle: no alcohol, occasional exercise, no hazards
    pub fn neutral() -> Self {
        Self {
            alcohol_use: AlcoholUse::None,
            exercise: ExerciseLevel::Occasional,
            hazardous_activities: Vec::new(),
        }
    }

    /// Returns true if any hazardous activity is declared
    pub fn has_hazardous_activities(&self) -> bool {
        !self.hazardous_activities.is_empty()
    }
}

/// Alcohol consumption levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholUse {
    None,
    Moderate,
    Heavy,
}

/// Exercise frequency levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseLevel {
    None,
    Occasional,
    Regular,
}

/// Financial profile of the applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Annual income (must be positive)
    pub annual_income: Decimal,
    /// Net worth
    pub net_worth: Decimal,
    /// Liquid assets
    pub liquid_assets: Decimal,
    /// Total outstanding debt
    pub total_debt: Decimal,
    /// Monthly expenses (must be positive)
    pub monthly_expenses: Decimal,
    /// Credit score (300-850 expected range)
    pub credit_score: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn sample_application() -> InsuranceApplication {
        InsuranceApplication {
            id: ApplicationId::new(),
            applicant_name: "Avery Quinn".to_string(),
            occupation: "Engineer".to_string(),
            residence_state: "OH".to_string(),
            medical: MedicalProfile {
                age: 40,
                height_inches: 70.0,
                weight_pounds: 160.0,
                is_smoker: false,
                conditions: vec![],
                family_history: vec![],
                lifestyle: LifestyleProfile::neutral(),
            },
            financial: FinancialProfile {
                annual_income: dec!(80000),
                net_worth: dec!(200000),
                liquid_assets: dec!(30000),
                total_debt: dec!(20000),
                monthly_expenses: dec!(3000),
                credit_score: 720,
            },
            requested_coverage: Money::new(dec!(500000), Currency::USD),
            product_code: "TERM_LIFE_20".to_string(),
        }
    }

    #[test]
    fn test_bmi_from_imperial_units() {
        let profile = sample_application().medical;
        let bmi = profile.bmi();
        // 70in / 160lb is roughly 23.0
        assert!(bmi > 22.5 && bmi < 23.5, "unexpected BMI {bmi}");
    }

    #[test]
    fn test_validate_accepts_well_formed_application() {
        assert!(sample_application().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_income() {
        let mut app = sample_application();
        app.financial.annual_income = dec!(0);
        assert!(matches!(
            app.validate(),
            Err(UnderwritingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_expenses() {
        let mut app = sample_application();
        app.financial.monthly_expenses = dec!(-100);
        assert!(matches!(
            app.validate(),
            Err(UnderwritingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_coverage() {
        let mut app = sample_application();
        app.requested_coverage = Money::zero(Currency::USD);
        assert!(matches!(
            app.validate(),
            Err(UnderwritingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_application_serializes_to_json() {
        let app = sample_application();
        let json = serde_json::to_string(&app).unwrap();
        let back: InsuranceApplication = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, app.id);
        assert_eq!(back.requested_coverage, app.requested_coverage);
    }
}
