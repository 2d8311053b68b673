//! Medical risk scoring
//!
//! Converts a medical profile into an additive risk score, a medical risk
//! classification, and the documentation requirements that follow from it.
//! Every contribution is recorded as a [`RiskFactor`] so the final score is
//! auditable. Scoring is a total function: every branch has a default and
//! there are no error conditions.

use serde::{Deserialize, Serialize};

use crate::application::{
    AlcoholUse, ConditionKind, ConditionSeverity, ExerciseLevel, FamilyHistoryEntry,
    LifestyleProfile, MedicalCondition, MedicalProfile, Relationship,
};
use crate::tables;

/// Medical risk classification
///
/// Ordinal classes from best to uninsurable. Thresholds on the accumulated
/// risk score use inclusive upper bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicalRiskClass {
    /// Score 10 or below - best rates
    SuperPreferred,
    /// Score 25 or below
    Preferred,
    /// Score 50 or below - normal rates
    Standard,
    /// Score 100 or below - rated
    Substandard,
    /// Above 100 - uninsurable
    Declined,
}

impl MedicalRiskClass {
    /// Classifies an accumulated risk score
    pub fn from_score(score: i32) -> Self {
        if score <= 10 {
            MedicalRiskClass::SuperPreferred
        } else if score <= 25 {
            MedicalRiskClass::Preferred
        } else if score <= 50 {
            MedicalRiskClass::Standard
        } else if score <= 100 {
            MedicalRiskClass::Substandard
        } else {
            MedicalRiskClass::Declined
        }
    }

    /// Returns the rating factor for this class
    ///
    /// The declined value is a sentinel that keeps the audit trail honest;
    /// decisions branch on the class itself, never on this number.
    pub fn rating_factor(&self) -> rust_decimal::Decimal {
        use rust_decimal_macros::dec;
        match self {
            MedicalRiskClass::SuperPreferred => dec!(0.85),
            MedicalRiskClass::Preferred => dec!(0.95),
            MedicalRiskClass::Standard => dec!(1.00),
            MedicalRiskClass::Substandard => dec!(1.25),
            MedicalRiskClass::Declined => dec!(999.99),
        }
    }
}

/// A single scored contribution to the medical risk score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Category of the contribution (AGE, BMI, CONDITION, ...)
    pub category: String,
    /// Human-readable description
    pub description: String,
    /// Integer score contribution
    pub score: i32,
}

impl RiskFactor {
    fn new(category: &str, description: impl Into<String>, score: i32) -> Self {
        Self {
            category: category.to_string(),
            description: description.into(),
            score,
        }
    }
}

/// Result of medical risk scoring
///
/// Immutable once produced; passed forward to aggregation and decisioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalAssessment {
    /// Accumulated risk score (never negative)
    pub risk_score: i32,
    /// Risk classification derived from the score
    pub risk_class: MedicalRiskClass,
    /// Audit trail of scored contributions
    pub risk_factors: Vec<RiskFactor>,
    /// Whether a medical exam is required before a final decision
    pub medical_exam_required: bool,
    /// Additional documentation requirements
    pub additional_requirements: Vec<String>,
}

/// Scores medical profiles
///
/// Stateless; safe to share across threads.
#[derive(Debug, Default)]
pub struct MedicalRiskScorer;

impl MedicalRiskScorer {
    /// Creates a new scorer
    pub fn new() -> Self {
        Self
    }

    /// Scores a medical profile
    ///
    /// Accumulates independent contributions from age, smoking status, BMI,
    /// disclosed conditions, family history, and lifestyle. The lifestyle
    /// sub-score is floored at zero before it joins the total, so the final
    /// score is never negative.
    pub fn score(&self, profile: &MedicalProfile) -> MedicalAssessment {
        let mut factors = Vec::new();
        let mut score = 0;

        let age_score = age_band_score(profile.age);
        score += age_score;
        factors.push(RiskFactor::new(
            "AGE",
            format!("Age {} band contribution", profile.age),
            age_score,
        ));

        if profile.is_smoker {
            score += 50;
            factors.push(RiskFactor::new("SMOKER", "Current tobacco use", 50));
        }

        let bmi = profile.bmi();
        let bmi_score = bmi_band_score(bmi);
        score += bmi_score;
        factors.push(RiskFactor::new(
            "BMI",
            format!("BMI {:.1} band contribution", bmi),
            bmi_score,
        ));

        for condition in &profile.conditions {
            let condition_score = condition_score(condition);
            score += condition_score;
            factors.push(RiskFactor::new(
                "CONDITION",
                format!("{:?}", condition.kind),
                condition_score,
            ));
        }

        for entry in &profile.family_history {
            let entry_score = family_history_score(entry);
            score += entry_score;
            factors.push(RiskFactor::new(
                "FAMILY_HISTORY",
                format!("{:?}: {}", entry.relationship, entry.condition),
                entry_score,
            ));
        }

        let lifestyle_score = lifestyle_score(&profile.lifestyle);
        score += lifestyle_score;
        factors.push(RiskFactor::new(
            "LIFESTYLE",
            "Alcohol, exercise, and hazardous activities",
            lifestyle_score,
        ));

        let medical_exam_required =
            score > 50 || profile.age > 50 || !profile.conditions.is_empty();

        MedicalAssessment {
            risk_score: score,
            risk_class: MedicalRiskClass::from_score(score),
            risk_factors: factors,
            medical_exam_required,
            additional_requirements: additional_requirements(score, profile),
        }
    }
}

/// Age band contributions
fn age_band_score(age: u32) -> i32 {
    match age {
        0..=24 => 5,
        25..=34 => 0,
        35..=44 => 10,
        45..=54 => 20,
        55..=64 => 35,
        _ => 50,
    }
}

/// BMI band contributions
fn bmi_band_score(bmi: f64) -> i32 {
    if bmi < 18.5 {
        15
    } else if bmi < 25.0 {
        0
    } else if bmi < 30.0 {
        10
    } else if bmi < 35.0 {
        25
    } else if bmi < 40.0 {
        40
    } else {
        60
    }
}

/// Scores a disclosed condition by kind and severity
fn condition_score(condition: &MedicalCondition) -> i32 {
    match &condition.kind {
        ConditionKind::Diabetes => match condition.severity {
            Some(ConditionSeverity::Controlled) => 30,
            Some(ConditionSeverity::Uncontrolled) => 80,
            _ => 50,
        },
        ConditionKind::Hypertension => match condition.severity {
            Some(ConditionSeverity::Mild) => 15,
            Some(ConditionSeverity::Moderate) => 30,
            Some(ConditionSeverity::Severe) => 60,
            _ => 25,
        },
        ConditionKind::HeartDisease => 100,
        ConditionKind::Cancer => match condition.years_in_remission {
            0..=2 => 150,
            3..=5 => 75,
            _ => 25,
        },
        ConditionKind::Other(_) => 20,
    }
}

/// Scores a family history entry
///
/// Base score by condition, scaled by relationship closeness and a 1.5x
/// early-onset multiplier for diagnoses before age 60, truncated to an
/// integer.
fn family_history_score(entry: &FamilyHistoryEntry) -> i32 {
    let base = tables::family_condition_score(&entry.condition) as f64;

    let relationship_multiplier = match entry.relationship {
        Relationship::Parent => 1.0,
        Relationship::Sibling => 0.8,
        Relationship::Grandparent => 0.5,
        Relationship::Other => 0.3,
    };

    let onset_multiplier = match entry.age_at_diagnosis {
        Some(age) if age < 60 => 1.5,
        _ => 1.0,
    };

    (base * relationship_multiplier * onset_multiplier) as i32
}

/// Scores lifestyle, floored at zero
fn lifestyle_score(lifestyle: &LifestyleProfile) -> i32 {
    let mut score = match lifestyle.alcohol_use {
        AlcoholUse::Heavy => 25,
        AlcoholUse::Moderate => 5,
        AlcoholUse::None => 0,
    };

    score += match lifestyle.exercise {
        ExerciseLevel::None => 15,
        ExerciseLevel::Occasional => 0,
        ExerciseLevel::Regular => -5,
    };

    for activity in &lifestyle.hazardous_activities {
        score += tables::hazardous_activity_score(activity);
    }

    score.max(0)
}

/// Determines additional documentation requirements
fn additional_requirements(score: i32, profile: &MedicalProfile) -> Vec<String> {
    let mut requirements = Vec::new();

    if score > 75 {
        requirements.push("Attending Physician Statement".to_string());
        requirements.push("Medical Records for Disclosed Conditions".to_string());
    }

    if profile
        .conditions
        .iter()
        .any(|c| c.kind == ConditionKind::HeartDisease)
    {
        requirements.push("Cardiac Workup".to_string());
    }

    if profile
        .conditions
        .iter()
        .any(|c| c.kind == ConditionKind::Diabetes)
    {
        requirements.push("Diabetic Panel".to_string());
    }

    if profile.age > 65 {
        requirements.push("Cognitive Assessment".to_string());
    }

    requirements
}
