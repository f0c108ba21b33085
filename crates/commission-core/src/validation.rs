//! # Validation Module
//!
//! Input validation for the commission engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form (TypeScript)                                   │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: RPC boundary (Rust)                                          │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: business range validation                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: The cascade itself                                           │
//! │  └── only ever sees non-negative amounts and 0-100% rates              │
//! │                                                                         │
//! │  Everything is checked BEFORE stage 1 runs, so a failed calculation    │
//! │  can never leave a half-built breakdown behind.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use commission_core::validation::{validate_amount_cents, validate_percent_bps};
//!
//! // Validate a price before building an input
//! validate_amount_cents("property_price", 50_000_000).unwrap();
//!
//! // Validate a split percent
//! validate_percent_bps("company_split", 7000).unwrap();
//! ```

use crate::error::{CommissionError, CommissionResult};
use crate::types::{CommissionInput, CommissionRate, Percent, RepresentationMode};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a monetary amount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (zero-commission deals exist)
///
/// ## Example
/// ```rust
/// use commission_core::validation::validate_amount_cents;
///
/// assert!(validate_amount_cents("property_price", 50_000_000).is_ok());
/// assert!(validate_amount_cents("property_price", 0).is_ok());
/// assert!(validate_amount_cents("property_price", -100).is_err());
/// ```
pub fn validate_amount_cents(field: &str, cents: i64) -> CommissionResult<()> {
    if cents < 0 {
        return Err(CommissionError::InvalidAmount {
            field: field.to_string(),
            cents,
        });
    }

    Ok(())
}

/// Validates a percentage in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%)
/// - Negative values cannot occur: the wire type is unsigned
pub fn validate_percent_bps(field: &str, bps: u32) -> CommissionResult<()> {
    let value = Percent::from_bps(bps);
    if !value.is_valid_split() {
        return Err(CommissionError::InvalidPercent {
            field: field.to_string(),
            value,
        });
    }

    Ok(())
}

// =============================================================================
// Whole-Input Validation
// =============================================================================

/// Validates a complete [`CommissionInput`] before the cascade runs.
///
/// ## Checks
/// - property price non-negative
/// - percentage-kind rate within 0-100%, fixed-kind amount non-negative
/// - co-broker split within 0-100%, checked only in CoBroking mode; a
///   split supplied on a direct deal is unused, so it is ignored rather
///   than rejected
/// - company split within 0-100%
/// - leadership bonus rate within 0-100% when an upline is present
pub fn validate_input(input: &CommissionInput) -> CommissionResult<()> {
    validate_amount_cents("property_price", input.property_price_cents)?;

    match input.rate {
        CommissionRate::Percentage(rate) => {
            validate_percent_bps("rate_value", rate.bps())?;
        }
        CommissionRate::Fixed(cents) => {
            validate_amount_cents("rate_value", cents)?;
        }
    }

    if input.representation == RepresentationMode::CoBroking {
        if let Some(bps) = input.co_broker_split_bps {
            validate_percent_bps("co_broker_split", bps)?;
        }
    }

    validate_percent_bps("company_split", input.company_split_bps)?;

    if let Some(upline) = &input.upline {
        validate_percent_bps("leadership_bonus_rate", upline.leadership_bonus_bps)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UplineRef;

    fn base_input() -> CommissionInput {
        CommissionInput {
            property_price_cents: 50_000_000,
            rate: CommissionRate::Percentage(Percent::from_bps(500)),
            representation: RepresentationMode::Direct,
            co_broker_split_bps: None,
            agent_tier: "Associate".to_string(),
            company_split_bps: 7000,
            upline: None,
        }
    }

    #[test]
    fn test_validate_amount_cents() {
        assert!(validate_amount_cents("price", 0).is_ok());
        assert!(validate_amount_cents("price", 1099).is_ok());
        assert!(validate_amount_cents("price", -100).is_err());
    }

    #[test]
    fn test_validate_percent_bps() {
        assert!(validate_percent_bps("split", 0).is_ok());
        assert!(validate_percent_bps("split", 7000).is_ok());
        assert!(validate_percent_bps("split", 10_000).is_ok());
        assert!(validate_percent_bps("split", 10_001).is_err());
    }

    #[test]
    fn test_validate_input_accepts_baseline() {
        assert!(validate_input(&base_input()).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let input = CommissionInput {
            property_price_cents: -1,
            ..base_input()
        };
        assert_eq!(
            validate_input(&input),
            Err(CommissionError::InvalidAmount {
                field: "property_price".to_string(),
                cents: -1,
            })
        );
    }

    #[test]
    fn test_percentage_rate_above_full_rejected() {
        let input = CommissionInput {
            rate: CommissionRate::Percentage(Percent::from_bps(10_100)),
            ..base_input()
        };
        assert!(matches!(
            validate_input(&input),
            Err(CommissionError::InvalidPercent { ref field, .. }) if field == "rate_value"
        ));
    }

    #[test]
    fn test_negative_fixed_rate_rejected() {
        let input = CommissionInput {
            rate: CommissionRate::Fixed(-500),
            ..base_input()
        };
        assert!(matches!(
            validate_input(&input),
            Err(CommissionError::InvalidAmount { ref field, .. }) if field == "rate_value"
        ));
    }

    #[test]
    fn test_co_broker_split_checked_in_co_broking() {
        let input = CommissionInput {
            representation: RepresentationMode::CoBroking,
            co_broker_split_bps: Some(15_000), // 150%
            ..base_input()
        };
        assert_eq!(
            validate_input(&input),
            Err(CommissionError::InvalidPercent {
                field: "co_broker_split".to_string(),
                value: Percent::from_bps(15_000),
            })
        );
    }

    #[test]
    fn test_co_broker_split_ignored_in_direct() {
        // Direct deals do not use the split, so even a nonsense value is
        // ignored rather than rejected.
        let input = CommissionInput {
            representation: RepresentationMode::Direct,
            co_broker_split_bps: Some(15_000),
            ..base_input()
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_upline_bonus_rate_checked() {
        let input = CommissionInput {
            upline: Some(UplineRef {
                agent_id: "a-17".to_string(),
                name: None,
                leadership_bonus_bps: 12_000,
            }),
            ..base_input()
        };
        assert!(matches!(
            validate_input(&input),
            Err(CommissionError::InvalidPercent { ref field, .. })
                if field == "leadership_bonus_rate"
        ));
    }
}
