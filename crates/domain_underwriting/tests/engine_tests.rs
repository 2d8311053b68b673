//! End-to-End Engine Tests
//!
//! These tests exercise the full `evaluate` pipeline through the
//! `UnderwritingService`:
//! - The clean-applicant approval path with an exact premium
//! - Decline paths (medical, financial justification)
//! - Rated and postponed outcomes
//! - The stability of the serialized result contract
//!
//! # Test Organization
//!
//! - `approval_tests` - applications that approve as applied
//! - `decline_tests` - decline precedence over other outcomes
//! - `rated_tests` - substandard outcomes that approve with rating
//! - `postpone_tests` - outstanding-requirement outcomes
//! - `contract_tests` - serialization and result shape

use rust_decimal_macros::dec;

use domain_underwriting::{
    AlcoholUse, ConditionKind, CoverageJustification, ExerciseLevel, LifestyleProfile,
    MedicalCondition, MedicalRiskClass, RatingCategory, RiskClass, StabilityRating,
    UnderwritingDecision, UnderwritingService,
};
use test_utils::{
    assert_all_rating_categories, assert_decision, assert_premium_floor, ApplicationBuilder,
    FinancialFixtures, StringFixtures,
};

fn service() -> UnderwritingService {
    UnderwritingService::new("uw-test")
}

// ============================================================================
// APPROVAL TESTS
// ============================================================================

mod approval_tests {
    use super::*;

    /// A 40-year-old engineer in Ohio with a preferred medical profile:
    /// age contributes 10, moderate alcohol 5, everything else 0, so the
    /// medical class is Preferred and the only non-unit factor is 0.95.
    /// Premium: 500000 x 0.001 x 0.95 = 475.00.
    #[test]
    fn test_preferred_engineer_approves_at_475() {
        let application = ApplicationBuilder::new()
            .with_age(40)
            .with_occupation("Engineer")
            .with_state("OH")
            .with_lifestyle(LifestyleProfile {
                alcohol_use: AlcoholUse::Moderate,
                exercise: ExerciseLevel::Occasional,
                hazardous_activities: vec![],
            })
            .with_income(dec!(80000))
            .with_net_worth(dec!(200000))
            .with_coverage(dec!(500000))
            .build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(result.medical_assessment.risk_score, 15);
        assert_eq!(
            result.medical_assessment.risk_class,
            MedicalRiskClass::Preferred
        );
        assert_eq!(
            result.financial_assessment.max_coverage_by_income,
            dec!(1200000)
        );
        assert_eq!(
            result.financial_assessment.justification,
            CoverageJustification::IncomeReplacement
        );
        assert_eq!(
            result.rating_factors.get(RatingCategory::Medical),
            Some(dec!(0.95))
        );
        assert_eq!(
            result.rating_factors.get(RatingCategory::Occupation),
            Some(dec!(1.00))
        );
        assert_eq!(result.risk_assessment.overall_risk_score, dec!(0.95));

        assert_decision(&result, UnderwritingDecision::ApproveAsApplied);
        assert_eq!(result.premium.amount(), dec!(475.00));
        assert!(result.conditions.is_empty());
    }

    /// A clean young applicant lands in the super-preferred class and gets
    /// the 0.85 medical discount.
    #[test]
    fn test_clean_thirty_year_old_gets_super_preferred_discount() {
        let application = ApplicationBuilder::new().with_coverage(dec!(500000)).build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(result.medical_assessment.risk_score, 0);
        assert_eq!(
            result.rating_factors.get(RatingCategory::Medical),
            Some(dec!(0.85))
        );
        assert_decision(&result, UnderwritingDecision::ApproveAsApplied);
        // 500000 x 0.001 x 0.85
        assert_eq!(result.premium.amount(), dec!(425.00));
    }

    /// A high-cost state raises the premium but not the outcome:
    /// 0.85 x 1.10 = 0.935 stays in the standard band.
    #[test]
    fn test_high_cost_state_raises_premium_only() {
        let application = ApplicationBuilder::new()
            .with_state(StringFixtures::high_cost_state())
            .with_coverage(dec!(500000))
            .build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(
            result.rating_factors.get(RatingCategory::Geographic),
            Some(dec!(1.10))
        );
        assert_eq!(result.risk_class, RiskClass::Standard);
        assert_decision(&result, UnderwritingDecision::ApproveAsApplied);
        // 500000 x 0.001 x 0.85 x 1.10 = 467.50
        assert_eq!(result.premium.amount(), dec!(467.50));
    }

    /// Stretched finances hurt the stability rating without blocking an
    /// otherwise justified request.
    #[test]
    fn test_stretched_finances_rate_poor_but_approve() {
        let application = ApplicationBuilder::new()
            .with_financial(FinancialFixtures::stretched())
            .with_coverage(dec!(400000))
            .build();

        let result = service().evaluate(&application).unwrap();

        // 45000 x 10 = 450000 still covers the request
        assert_eq!(
            result.financial_assessment.justification,
            CoverageJustification::IncomeReplacement
        );
        assert_eq!(
            result.financial_assessment.stability_rating,
            StabilityRating::Poor
        );
        assert_decision(&result, UnderwritingDecision::ApproveAsApplied);
    }

    /// Small coverage amounts hit the 100.00 premium floor
    #[test]
    fn test_small_coverage_hits_premium_floor() {
        let application = ApplicationBuilder::new().with_coverage(dec!(60000)).build();

        let result = service().evaluate(&application).unwrap();

        assert_decision(&result, UnderwritingDecision::ApproveAsApplied);
        assert_eq!(result.premium.amount(), dec!(100.00));
        assert_premium_floor(&result);
    }
}

// ============================================================================
// DECLINE TESTS
// ============================================================================

mod decline_tests {
    use super::*;

    /// Heart disease scores a flat 100, which with any age contribution
    /// pushes the medical class to Declined; rule 1 dominates everything.
    #[test]
    fn test_heart_disease_declines_regardless_of_finances() {
        let application = ApplicationBuilder::new()
            .with_age(40)
            .with_condition(MedicalCondition::new(ConditionKind::HeartDisease))
            .with_income(dec!(500000))
            .with_net_worth(dec!(10000000))
            .build();

        let result = service().evaluate(&application).unwrap();

        assert!(result.medical_assessment.risk_score >= 110);
        assert_eq!(
            result.medical_assessment.risk_class,
            MedicalRiskClass::Declined
        );
        assert_decision(&result, UnderwritingDecision::Decline);
        assert!(result.conditions.is_empty());
    }

    /// Coverage far beyond both derived maxima declines on justification
    /// even with a clean medical profile.
    #[test]
    fn test_excessive_coverage_declines_despite_clean_medical() {
        let application = ApplicationBuilder::new()
            .with_income(dec!(80000))
            .with_net_worth(dec!(200000))
            .with_coverage(dec!(10000000))
            .build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(
            result.medical_assessment.risk_class,
            MedicalRiskClass::SuperPreferred
        );
        assert_eq!(
            result.financial_assessment.justification,
            CoverageJustification::InsufficientJustification
        );
        assert_decision(&result, UnderwritingDecision::Decline);
    }

    /// The sentinel factor drives the overall product past the declined
    /// threshold, but the decision comes from the classification, not the
    /// number: premium is still computed for the audit trail.
    #[test]
    fn test_declined_result_still_carries_audit_premium() {
        let application = ApplicationBuilder::new()
            .with_coverage(dec!(10000000))
            .build();

        let result = service().evaluate(&application).unwrap();

        assert_decision(&result, UnderwritingDecision::Decline);
        assert_eq!(result.risk_class, RiskClass::Declined);
        assert!(result.premium.amount() > dec!(100000));
    }
}

// ============================================================================
// RATED TESTS
// ============================================================================

mod rated_tests {
    use super::*;

    /// A 55-year-old smoker scores 35 + 50 = 85: substandard, approved with
    /// a rating condition rather than postponed, even though an exam is
    /// outstanding.
    #[test]
    fn test_older_smoker_approves_with_rating() {
        let application = ApplicationBuilder::new().with_age(55).smoker().build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(result.medical_assessment.risk_score, 85);
        assert_eq!(
            result.medical_assessment.risk_class,
            MedicalRiskClass::Substandard
        );
        assert!(result.medical_assessment.medical_exam_required);
        assert_decision(&result, UnderwritingDecision::ApproveWithRating);
        assert_eq!(result.conditions.len(), 1);
        assert!(result.conditions[0].contains("risk factor"));
    }

    /// A hazardous occupation alone can push the overall product into the
    /// substandard band.
    #[test]
    fn test_high_hazard_occupation_is_rated() {
        let application = ApplicationBuilder::new()
            .with_occupation(StringFixtures::high_hazard_occupation())
            .build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(
            result.rating_factors.get(RatingCategory::Occupation),
            Some(dec!(2.00))
        );
        // 0.85 x 2.00 = 1.70, substandard band
        assert_eq!(result.risk_class, RiskClass::Substandard);
        assert_decision(&result, UnderwritingDecision::ApproveWithRating);
    }
}

// ============================================================================
// POSTPONE TESTS
// ============================================================================

mod postpone_tests {
    use super::*;

    /// Over age 50 an exam is always required; with an otherwise clean
    /// profile the application postpones rather than approves.
    #[test]
    fn test_over_fifty_postpones_pending_exam() {
        let application = ApplicationBuilder::new().with_age(51).build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(result.medical_assessment.risk_score, 20);
        assert!(result.medical_assessment.medical_exam_required);
        assert_decision(&result, UnderwritingDecision::PostponePendingRequirements);
        assert_eq!(
            result.conditions,
            vec!["Medical examination required before final decision".to_string()]
        );
    }

    /// Any disclosed condition requires an exam even when the score stays
    /// in a preferred band.
    #[test]
    fn test_mild_condition_postpones() {
        let application = ApplicationBuilder::new()
            .with_condition(MedicalCondition::with_severity(
                ConditionKind::Hypertension,
                domain_underwriting::ConditionSeverity::Mild,
            ))
            .build();

        let result = service().evaluate(&application).unwrap();

        assert_eq!(result.medical_assessment.risk_score, 15);
        assert_decision(&result, UnderwritingDecision::PostponePendingRequirements);
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

mod contract_tests {
    use super::*;

    /// The result is the stable contract for downstream consumers: it must
    /// carry all five rating categories and survive a JSON round trip.
    #[test]
    fn test_result_shape_and_json_round_trip() {
        let application = ApplicationBuilder::new().build();
        let result = service().evaluate(&application).unwrap();

        assert_all_rating_categories(&result);
        assert_eq!(result.evaluator_id, "uw-test");

        let json = serde_json::to_value(&result).unwrap();
        // Decimals serialize as strings; downstream consumers parse them as such
        assert_eq!(json["rating_factors"]["MEDICAL"], "0.85");
        assert_eq!(json["rating_factors"]["OCCUPATION"], "1.00");

        let back: domain_underwriting::UnderwritingResult =
            serde_json::from_value(json).unwrap();
        assert_eq!(back.decision, result.decision);
        assert_eq!(back.premium, result.premium);
        assert_eq!(back.evaluated_at, result.evaluated_at);
    }
}
