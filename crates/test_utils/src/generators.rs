//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random applications that
//! satisfy the engine's input contract (positive income, expenses, and
//! coverage).

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_underwriting::{
    AlcoholUse, ConditionKind, ConditionSeverity, ExerciseLevel, FamilyHistoryEntry,
    FinancialProfile, LifestyleProfile, MedicalCondition, MedicalProfile, Relationship,
};

/// Strategy for applicant ages across all bands
pub fn age_strategy() -> impl Strategy<Value = u32> {
    18u32..=90u32
}

/// Strategy for plausible heights in inches
pub fn height_strategy() -> impl Strategy<Value = f64> {
    58.0f64..80.0f64
}

/// Strategy for plausible weights in pounds
pub fn weight_strategy() -> impl Strategy<Value = f64> {
    90.0f64..350.0f64
}

/// Strategy for alcohol use levels
pub fn alcohol_strategy() -> impl Strategy<Value = AlcoholUse> {
    prop_oneof![
        Just(AlcoholUse::None),
        Just(AlcoholUse::Moderate),
        Just(AlcoholUse::Heavy),
    ]
}

/// Strategy for exercise levels
pub fn exercise_strategy() -> impl Strategy<Value = ExerciseLevel> {
    prop_oneof![
        Just(ExerciseLevel::None),
        Just(ExerciseLevel::Occasional),
        Just(ExerciseLevel::Regular),
    ]
}

/// Strategy for hazardous activity lists
pub fn hazardous_activities_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("Skydiving".to_string()),
            Just("Rock Climbing".to_string()),
            Just("Motorcycle Racing".to_string()),
            Just("Scuba Diving".to_string()),
        ],
        0..3,
    )
}

/// Strategy for lifestyle profiles
pub fn lifestyle_strategy() -> impl Strategy<Value = LifestyleProfile> {
    (
        alcohol_strategy(),
        exercise_strategy(),
        hazardous_activities_strategy(),
    )
        .prop_map(|(alcohol_use, exercise, hazardous_activities)| LifestyleProfile {
            alcohol_use,
            exercise,
            hazardous_activities,
        })
}

/// Strategy for condition severities
pub fn severity_strategy() -> impl Strategy<Value = ConditionSeverity> {
    prop_oneof![
        Just(ConditionSeverity::Controlled),
        Just(ConditionSeverity::Uncontrolled),
        Just(ConditionSeverity::Mild),
        Just(ConditionSeverity::Moderate),
        Just(ConditionSeverity::Severe),
    ]
}

/// Strategy for medical conditions
pub fn condition_strategy() -> impl Strategy<Value = MedicalCondition> {
    (
        prop_oneof![
            Just(ConditionKind::Diabetes),
            Just(ConditionKind::Hypertension),
            Just(ConditionKind::HeartDisease),
            Just(ConditionKind::Cancer),
            Just(ConditionKind::Other("Asthma".to_string())),
        ],
        prop::option::of(severity_strategy()),
        0u32..10u32,
    )
        .prop_map(|(kind, severity, years_in_remission)| MedicalCondition {
            kind,
            severity,
            years_in_remission,
        })
}

/// Strategy for family history entries
pub fn family_history_strategy() -> impl Strategy<Value = FamilyHistoryEntry> {
    (
        prop_oneof![
            Just(Relationship::Parent),
            Just(Relationship::Sibling),
            Just(Relationship::Grandparent),
            Just(Relationship::Other),
        ],
        prop_oneof![
            Just("Heart Disease".to_string()),
            Just("Cancer".to_string()),
            Just("Diabetes".to_string()),
            Just("Stroke".to_string()),
        ],
        prop::option::of(30u32..90u32),
    )
        .prop_map(|(relationship, condition, age_at_diagnosis)| FamilyHistoryEntry {
            relationship,
            condition,
            age_at_diagnosis,
        })
}

/// Strategy for full medical profiles
pub fn medical_profile_strategy() -> impl Strategy<Value = MedicalProfile> {
    (
        age_strategy(),
        height_strategy(),
        weight_strategy(),
        any::<bool>(),
        prop::collection::vec(condition_strategy(), 0..3),
        prop::collection::vec(family_history_strategy(), 0..3),
        lifestyle_strategy(),
    )
        .prop_map(
            |(age, height_inches, weight_pounds, is_smoker, conditions, family_history, lifestyle)| {
                MedicalProfile {
                    age,
                    height_inches,
                    weight_pounds,
                    is_smoker,
                    conditions,
                    family_history,
                    lifestyle,
                }
            },
        )
}

/// Strategy for financial profiles satisfying the input contract
pub fn financial_profile_strategy() -> impl Strategy<Value = FinancialProfile> {
    (
        20_000i64..600_000i64,
        0i64..5_000_000i64,
        0i64..500_000i64,
        0i64..400_000i64,
        1_000i64..15_000i64,
        300u16..=850u16,
    )
        .prop_map(
            |(income, net_worth, liquid, debt, expenses, credit_score)| FinancialProfile {
                annual_income: Decimal::from(income),
                net_worth: Decimal::from(net_worth),
                liquid_assets: Decimal::from(liquid),
                total_debt: Decimal::from(debt),
                monthly_expenses: Decimal::from(expenses),
                credit_score,
            },
        )
}

/// Strategy for positive USD coverage amounts
pub fn coverage_strategy() -> impl Strategy<Value = Money> {
    (50_000i64..5_000_000i64).prop_map(|amount| Money::new(Decimal::from(amount), Currency::USD))
}
