//! Core Kernel - Foundational types for the underwriting risk engine
//!
//! This crate provides the fundamental building blocks used across the
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Rates expressed as percentages or per-mille values
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{ApplicationId, EvaluationId};
pub use money::{Currency, Money, MoneyError, Rate};
