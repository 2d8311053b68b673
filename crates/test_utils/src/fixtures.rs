//! Pre-built test data for common profiles
//!
//! Fixtures describe the "clean applicant" baseline most tests start from:
//! a healthy, financially stable 30-year-old engineer in a neutral state.

use rust_decimal_macros::dec;

use domain_underwriting::{FinancialProfile, LifestyleProfile, MedicalProfile};

/// Medical profile fixtures
pub struct MedicalFixtures;

impl MedicalFixtures {
    /// A healthy non-smoker with no history, aged as given
    ///
    /// 70in / 160lb puts the BMI around 23, inside the zero-score band.
    pub fn healthy(age: u32) -> MedicalProfile {
        MedicalProfile {
            age,
            height_inches: 70.0,
            weight_pounds: 160.0,
            is_smoker: false,
            conditions: vec![],
            family_history: vec![],
            lifestyle: LifestyleProfile::neutral(),
        }
    }
}

/// Financial profile fixtures
pub struct FinancialFixtures;

impl FinancialFixtures {
    /// A stable middle-income profile
    ///
    /// Income 80k (15x multiplier band), modest debt, a year of expenses in
    /// liquid assets, good credit.
    pub fn stable() -> FinancialProfile {
        FinancialProfile {
            annual_income: dec!(80000),
            net_worth: dec!(200000),
            liquid_assets: dec!(40000),
            total_debt: dec!(10000),
            monthly_expenses: dec!(3000),
            credit_score: 750,
        }
    }

    /// A stretched profile: heavy debt, thin liquidity, weak credit
    pub fn stretched() -> FinancialProfile {
        FinancialProfile {
            annual_income: dec!(45000),
            net_worth: dec!(20000),
            liquid_assets: dec!(2000),
            total_debt: dec!(30000),
            monthly_expenses: dec!(3500),
            credit_score: 540,
        }
    }
}

/// String fixtures for occupations and states
pub struct StringFixtures;

impl StringFixtures {
    /// A low-risk occupation rated at 1.00
    pub fn low_risk_occupation() -> &'static str {
        "Engineer"
    }

    /// A high-hazard occupation rated at 2.00
    pub fn high_hazard_occupation() -> &'static str {
        "Logger"
    }

    /// A state with the default geographic factor
    pub fn neutral_state() -> &'static str {
        "OH"
    }

    /// A state with an elevated geographic factor
    pub fn high_cost_state() -> &'static str {
        "FL"
    }
}
