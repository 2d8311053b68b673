//! Underwriting decisioning
//!
//! Applies a fixed precedence rule over the three assessments. The rule
//! order is load-bearing: declines dominate ratings, ratings dominate
//! postponements, and only a fully clean application is approved as
//! applied.

use serde::{Deserialize, Serialize};

use crate::financial::{CoverageJustification, FinancialAssessment};
use crate::medical::{MedicalAssessment, MedicalRiskClass};
use crate::rating::{RiskAssessment, RiskClass};

/// Terminal underwriting decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnderwritingDecision {
    /// Approved at the applied-for terms
    ApproveAsApplied,
    /// Approved with a rating applied to the premium
    ApproveWithRating,
    /// Declined
    Decline,
    /// Postponed until outstanding requirements are met
    PostponePendingRequirements,
}

/// A decision with its attached conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// The selected terminal decision
    pub decision: UnderwritingDecision,
    /// Conditions attached to the decision
    pub conditions: Vec<String>,
}

/// Applies the decision precedence rules
///
/// Stateless; safe to share across threads.
#[derive(Debug, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    /// Creates a new decision engine
    pub fn new() -> Self {
        Self
    }

    /// Selects the final decision, first matching rule wins
    ///
    /// Precedence:
    /// 1. Medical class declined
    /// 2. Insufficient financial justification
    /// 3. Overall risk class declined
    /// 4. Medical class substandard (rated)
    /// 5. Overall risk class substandard (rated)
    /// 6. Medical exam outstanding (postpone)
    /// 7. Approve as applied
    ///
    /// The rules branch on typed classifications only; the 999.99 sentinel
    /// factors never participate in control flow here.
    pub fn decide(
        &self,
        medical: &MedicalAssessment,
        financial: &FinancialAssessment,
        risk: &RiskAssessment,
    ) -> Decision {
        if medical.risk_class == MedicalRiskClass::Declined {
            return Decision {
                decision: UnderwritingDecision::Decline,
                conditions: Vec::new(),
            };
        }

        if financial.justification == CoverageJustification::InsufficientJustification {
            return Decision {
                decision: UnderwritingDecision::Decline,
                conditions: Vec::new(),
            };
        }

        if risk.overall_risk_class == RiskClass::Declined {
            return Decision {
                decision: UnderwritingDecision::Decline,
                conditions: Vec::new(),
            };
        }

        if medical.risk_class == MedicalRiskClass::Substandard
            || risk.overall_risk_class == RiskClass::Substandard
        {
            return Decision {
                decision: UnderwritingDecision::ApproveWithRating,
                conditions: vec![format!(
                    "Rated at composite risk factor {}",
                    risk.overall_risk_score
                )],
            };
        }

        if medical.medical_exam_required {
            return Decision {
                decision: UnderwritingDecision::PostponePendingRequirements,
                conditions: vec![
                    "Medical examination required before final decision".to_string(),
                ],
            };
        }

        Decision {
            decision: UnderwritingDecision::ApproveAsApplied,
            conditions: Vec::new(),
        }
    }
}
