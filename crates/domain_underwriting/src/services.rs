//! Underwriting service
//!
//! This module contains the domain service that composes the five engine
//! components into the single `evaluate` operation exposed to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use core_kernel::{EvaluationId, Money};

use crate::application::InsuranceApplication;
use crate::decision::{DecisionEngine, UnderwritingDecision};
use crate::error::UnderwritingError;
use crate::financial::{FinancialAssessment, FinancialCapacityEvaluator};
use crate::medical::{MedicalAssessment, MedicalRiskScorer};
use crate::premium::PremiumCalculator;
use crate::rating::{RatingFactorMap, RiskAggregator, RiskAssessment, RiskClass};

/// Final output of an underwriting evaluation
///
/// The sole object exposed to downstream consumers (analytics, compliance,
/// reporting); stable and JSON-serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderwritingResult {
    /// Time-ordered identifier for this evaluation
    pub evaluation_id: EvaluationId,
    /// Final decision
    pub decision: UnderwritingDecision,
    /// Overall risk classification
    pub risk_class: RiskClass,
    /// Composed rating factors
    pub rating_factors: RatingFactorMap,
    /// Medical assessment detail
    pub medical_assessment: MedicalAssessment,
    /// Financial assessment detail
    pub financial_assessment: FinancialAssessment,
    /// Aggregated risk assessment detail
    pub risk_assessment: RiskAssessment,
    /// Recommended annual premium
    pub premium: Money,
    /// Conditions attached to the decision
    pub conditions: Vec<String>,
    /// Identifier of the evaluating underwriter or session
    pub evaluator_id: String,
    /// Evaluation timestamp
    pub evaluated_at: DateTime<Utc>,
}

/// Service for underwriting insurance applications
///
/// The service is a pure, stateless function of its input apart from the
/// evaluator identity supplied by the caller at construction. Evaluations
/// are independent, CPU-only, and safe to run concurrently.
pub struct UnderwritingService {
    evaluator_id: String,
    medical_scorer: MedicalRiskScorer,
    financial_evaluator: FinancialCapacityEvaluator,
    risk_aggregator: RiskAggregator,
    premium_calculator: PremiumCalculator,
    decision_engine: DecisionEngine,
}

impl UnderwritingService {
    /// Creates a service stamping results with the given evaluator id
    ///
    /// The identity is always explicit from the caller; the engine never
    /// derives one internally.
    pub fn new(evaluator_id: impl Into<String>) -> Self {
        Self {
            evaluator_id: evaluator_id.into(),
            medical_scorer: MedicalRiskScorer::new(),
            financial_evaluator: FinancialCapacityEvaluator::new(),
            risk_aggregator: RiskAggregator::new(),
            premium_calculator: PremiumCalculator::new(),
            decision_engine: DecisionEngine::new(),
        }
    }

    /// Evaluates an application and produces an underwriting result
    ///
    /// This method:
    /// 1. Validates the application input contract
    /// 2. Scores the medical profile and evaluates financial capacity
    ///    (independent of each other)
    /// 3. Aggregates both into rating factors and an overall class
    /// 4. Calculates the premium
    /// 5. Applies the decision precedence rules
    ///
    /// # Errors
    ///
    /// Returns [`UnderwritingError::InvalidInput`] if income, expenses, or
    /// requested coverage are not positive. All other paths are total.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = UnderwritingService::new("uw-session-42");
    /// let result = service.evaluate(&application)?;
    /// match result.decision {
    ///     UnderwritingDecision::Decline => println!("Application declined"),
    ///     _ => println!("Premium: {}", result.premium),
    /// }
    /// ```
    pub fn evaluate(
        &self,
        application: &InsuranceApplication,
    ) -> Result<UnderwritingResult, UnderwritingError> {
        application.validate()?;

        debug!(application_id = %application.id, "evaluating application");

        let medical = self.medical_scorer.score(&application.medical);
        let financial = self
            .financial_evaluator
            .evaluate(&application.financial, application.requested_coverage)?;

        let risk = self
            .risk_aggregator
            .aggregate(application, &medical, &financial);

        // Computed on every path, declined ones included, for the audit trail
        let premium = self
            .premium_calculator
            .calculate(application.requested_coverage, &risk.rating_factors);

        let decision = self.decision_engine.decide(&medical, &financial, &risk);

        info!(
            application_id = %application.id,
            decision = ?decision.decision,
            risk_class = ?risk.overall_risk_class,
            "evaluation complete"
        );

        Ok(UnderwritingResult {
            evaluation_id: EvaluationId::new_v7(),
            decision: decision.decision,
            risk_class: risk.overall_risk_class,
            rating_factors: risk.rating_factors.clone(),
            medical_assessment: medical,
            financial_assessment: financial,
            risk_assessment: risk,
            premium,
            conditions: decision.conditions,
            evaluator_id: self.evaluator_id.clone(),
            evaluated_at: Utc::now(),
        })
    }
}
