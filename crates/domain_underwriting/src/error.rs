//! Underwriting domain errors
//!
//! This module defines all error types that can occur within the
//! underwriting risk engine.

use thiserror::Error;

/// Errors that can occur during underwriting evaluation
#[derive(Debug, Error)]
pub enum UnderwritingError {
    /// Input fails the entry-point validation contract
    ///
    /// Raised for non-positive annual income, non-positive monthly
    /// expenses, and non-positive requested coverage. The engine never
    /// divides before this check has passed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl UnderwritingError {
    /// Creates an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        UnderwritingError::InvalidInput(message.into())
    }
}
