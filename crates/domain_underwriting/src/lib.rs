//! Underwriting Risk Engine
//!
//! This crate implements the core underwriting logic for life insurance
//! applications: multi-factor risk scoring, threshold classification,
//! multiplicative rating composition, premium calculation, and a
//! precedence-ordered decision rule.
//!
//! # Architecture
//!
//! The engine is infrastructure-agnostic and contains only business logic:
//! - **Inputs**: `InsuranceApplication` with medical, financial, and
//!   lifestyle profiles
//! - **Components**: `MedicalRiskScorer`, `FinancialCapacityEvaluator`,
//!   `RiskAggregator`, `PremiumCalculator`, `DecisionEngine`
//! - **Service**: `UnderwritingService` composes the five components into
//!   a single `evaluate` operation
//! - **Output**: `UnderwritingResult`, the stable contract consumed by
//!   analytics, compliance, and reporting
//!
//! # Evaluation flow
//!
//! ```text
//! InsuranceApplication
//!     ├─> MedicalRiskScorer ──────> MedicalAssessment ──┐
//!     └─> FinancialCapacityEvaluator > FinancialAssessment ┤
//!                                                       v
//!                                   RiskAggregator -> RiskAssessment
//!                                       ├─> PremiumCalculator -> premium
//!                                       └─> DecisionEngine -> decision
//! ```
//!
//! Every evaluation is a pure, bounded, CPU-only function of its input;
//! the only shared state is the immutable lookup tables in [`tables`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_underwriting::{UnderwritingService, UnderwritingDecision};
//!
//! let service = UnderwritingService::new("uw-session-42");
//! let result = service.evaluate(&application)?;
//! if result.decision != UnderwritingDecision::Decline {
//!     println!("Approved at {}", result.premium);
//! }
//! ```

pub mod application;
pub mod decision;
pub mod error;
pub mod financial;
pub mod medical;
pub mod premium;
pub mod rating;
pub mod services;
pub mod tables;

pub use application::{
    AlcoholUse, ConditionKind, ConditionSeverity, ExerciseLevel, FamilyHistoryEntry,
    FinancialProfile, InsuranceApplication, LifestyleProfile, MedicalCondition,
    MedicalProfile, Relationship,
};
pub use decision::{Decision, DecisionEngine, UnderwritingDecision};
pub use error::UnderwritingError;
pub use financial::{
    CoverageJustification, FinancialAssessment, FinancialCapacityEvaluator, StabilityRating,
};
pub use medical::{MedicalAssessment, MedicalRiskClass, MedicalRiskScorer, RiskFactor};
pub use premium::PremiumCalculator;
pub use rating::{
    RatingCategory, RatingFactorMap, RiskAggregator, RiskAssessment, RiskClass,
};
pub use services::{UnderwritingResult, UnderwritingService};
