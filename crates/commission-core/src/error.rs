//! # Error Types
//!
//! Domain-specific error types for commission-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  commission-core errors (this file)                                    │
//! │  └── CommissionError  - Invalid inputs, overflow                       │
//! │                                                                         │
//! │  RPC layer (outside this repo)                                         │
//! │  └── surfaces the error message verbatim to the form UI                │
//! │                                                                         │
//! │  Every error is reported BEFORE any cascade stage runs; the engine     │
//! │  never returns a partially computed breakdown. Retrying is pointless:  │
//! │  the computation is deterministic, so the same input fails the same    │
//! │  way every time.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::Percent;

// =============================================================================
// Commission Error
// =============================================================================

/// Errors reported by the commission engine.
///
/// All variants are input problems or (theoretical) numeric range
/// problems; there are no I/O failure modes because the engine does no
/// I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommissionError {
    /// A monetary input is negative.
    ///
    /// ## When This Occurs
    /// - `property_price_cents < 0`
    /// - a fixed commission amount below zero
    ///
    /// Zero is NOT an error: a zero price or zero commission propagates
    /// zeros through every stage of the cascade.
    #[error("{field} cannot be negative (got {cents} cents)")]
    InvalidAmount { field: String, cents: i64 },

    /// A percentage input lies outside [0%, 100%].
    ///
    /// ## When This Occurs
    /// - co-broker split, company split, or leadership bonus rate above
    ///   100% (negative rates are unrepresentable on the wire)
    /// - a percentage-kind commission rate above 100%
    #[error("{field} must be between 0% and 100% (got {value})")]
    InvalidPercent { field: String, value: Percent },

    /// A cascade stage produced an amount outside the i64 cent range.
    ///
    /// ## When This Occurs
    /// Never for validated inputs: with rates capped at 100%, every stage
    /// output is bounded by its input. The contract still rejects rather
    /// than wraps if the bound is ever broken.
    #[error("arithmetic overflow computing {context}")]
    ArithmeticOverflow { context: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CommissionError.
pub type CommissionResult<T> = Result<T, CommissionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommissionError::InvalidAmount {
            field: "property_price".to_string(),
            cents: -500,
        };
        assert_eq!(
            err.to_string(),
            "property_price cannot be negative (got -500 cents)"
        );

        let err = CommissionError::InvalidPercent {
            field: "co_broker_split".to_string(),
            value: Percent::from_bps(15_000),
        };
        assert_eq!(
            err.to_string(),
            "co_broker_split must be between 0% and 100% (got 150%)"
        );
    }
}
