//! Test Data Builders
//!
//! Provides builder patterns for constructing test applications with
//! sensible defaults. Tests specify only the fields they care about.

use rust_decimal::Decimal;

use core_kernel::{ApplicationId, Currency, Money};
use domain_underwriting::{
    FamilyHistoryEntry, FinancialProfile, InsuranceApplication, LifestyleProfile,
    MedicalCondition, MedicalProfile,
};

use crate::fixtures::{FinancialFixtures, MedicalFixtures, StringFixtures};

/// Builder for constructing test applications
///
/// Defaults describe a clean 30-year-old applicant who approves as applied.
pub struct ApplicationBuilder {
    id: ApplicationId,
    applicant_name: String,
    occupation: String,
    residence_state: String,
    medical: MedicalProfile,
    financial: FinancialProfile,
    requested_coverage: Money,
    product_code: String,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    /// Creates a new builder with clean-applicant defaults
    pub fn new() -> Self {
        Self {
            id: ApplicationId::new(),
            applicant_name: "Jordan Blake".to_string(),
            occupation: StringFixtures::low_risk_occupation().to_string(),
            residence_state: StringFixtures::neutral_state().to_string(),
            medical: MedicalFixtures::healthy(30),
            financial: FinancialFixtures::stable(),
            requested_coverage: Money::new(Decimal::from(500_000), Currency::USD),
            product_code: "TERM_LIFE_20".to_string(),
        }
    }

    /// Sets the applicant age
    pub fn with_age(mut self, age: u32) -> Self {
        self.medical.age = age;
        self
    }

    /// Sets the occupation
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    /// Sets the residence state
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.residence_state = state.into();
        self
    }

    /// Marks the applicant as a smoker
    pub fn smoker(mut self) -> Self {
        self.medical.is_smoker = true;
        self
    }

    /// Sets height and weight
    pub fn with_build(mut self, height_inches: f64, weight_pounds: f64) -> Self {
        self.medical.height_inches = height_inches;
        self.medical.weight_pounds = weight_pounds;
        self
    }

    /// Adds a medical condition
    pub fn with_condition(mut self, condition: MedicalCondition) -> Self {
        self.medical.conditions.push(condition);
        self
    }

    /// Adds a family history entry
    pub fn with_family_history(mut self, entry: FamilyHistoryEntry) -> Self {
        self.medical.family_history.push(entry);
        self
    }

    /// Replaces the lifestyle profile
    pub fn with_lifestyle(mut self, lifestyle: LifestyleProfile) -> Self {
        self.medical.lifestyle = lifestyle;
        self
    }

    /// Replaces the medical profile wholesale
    pub fn with_medical(mut self, medical: MedicalProfile) -> Self {
        self.medical = medical;
        self
    }

    /// Replaces the financial profile wholesale
    pub fn with_financial(mut self, financial: FinancialProfile) -> Self {
        self.financial = financial;
        self
    }

    /// Sets annual income
    pub fn with_income(mut self, income: Decimal) -> Self {
        self.financial.annual_income = income;
        self
    }

    /// Sets net worth
    pub fn with_net_worth(mut self, net_worth: Decimal) -> Self {
        self.financial.net_worth = net_worth;
        self
    }

    /// Sets the requested coverage in USD
    pub fn with_coverage(mut self, amount: Decimal) -> Self {
        self.requested_coverage = Money::new(amount, Currency::USD);
        self
    }

    /// Builds the application
    pub fn build(self) -> InsuranceApplication {
        InsuranceApplication {
            id: self.id,
            applicant_name: self.applicant_name,
            occupation: self.occupation,
            residence_state: self.residence_state,
            medical: self.medical,
            financial: self.financial,
            requested_coverage: self.requested_coverage,
            product_code: self.product_code,
        }
    }
}
