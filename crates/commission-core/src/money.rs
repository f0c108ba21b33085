//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a commission cascade that error COMPOUNDS:                          │
//! │    4 stages × float rounding = payouts that do not reconcile            │
//! │    "agent + co-broker ≠ total" is a real payroll dispute                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every split is computed in cents, rounded half-up exactly once,      │
//! │    and the counterpart share is derived BY SUBTRACTION so the two       │
//! │    sides always sum back to the amount being split.                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use commission_core::money::Money;
//! use commission_core::types::Percent;
//!
//! // Create from cents (preferred)
//! let total = Money::from_cents(2_500_000); // $25,000.00
//!
//! // Split off 50% with half-up rounding
//! let half = total.percent_of(Percent::from_bps(5000)).unwrap();
//! assert_eq!(half.cents(), 1_250_000);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(25000.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::error::CommissionError;
use crate::types::Percent;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are rejected by validation, not by
///   the type; keeping the sign lets validators report what they saw
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  property_price ──► total_commission ──► agent_commission_share         │
/// │                                      └─► co_broker_share               │
/// │                                                                         │
/// │  agent_commission_share ──► agent_earnings                             │
/// │                         └─► company_share_gross ──► leadership bonus   │
/// │                                                  └─► company_share_net │
/// │                                                                         │
/// │  EVERY monetary value in the cascade flows through this type           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use commission_core::money::Money;
    ///
    /// let price = Money::from_cents(50_000_000); // $500,000.00
    /// assert_eq!(price.cents(), 50_000_000);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The RPC payloads, calculations, and persistence all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use commission_core::money::Money;
    ///
    /// let price = Money::from_major_minor(500_000, 0); // $500,000.00
    /// assert_eq!(price.cents(), 50_000_000);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Takes a percentage of this amount, rounding half-up at the cent.
    ///
    /// This is the single rounding point of the whole cascade: every stage
    /// computes ONE side of its split with `percent_of` and derives the
    /// other side by subtraction, so the two sides reconcile exactly.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF-UP AT THE CENT, ONCE PER STAGE                          │
    /// │                                                                     │
    /// │  $100.00 × 8.25%  = $8.25    exact, no rounding needed             │
    /// │  $10.01  × 50%    = $5.005   → $5.01 (half rounds up)              │
    /// │                                                                     │
    /// │  The counterpart ($10.01 − $5.01 = $5.00) is NOT re-rounded,       │
    /// │  so share + counterpart == original to the cent, always.           │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// Integer math in i128: `(cents * bps + 5000) / 10000`.
    /// The +5000 provides the half-up rounding (5000/10000 = 0.5).
    /// Callers must pass a non-negative amount; validation upstream
    /// guarantees this before any stage runs.
    ///
    /// ## Errors
    /// Returns [`CommissionError::ArithmeticOverflow`] if the result does
    /// not fit in i64 cents. With rates capped at 100% the result never
    /// exceeds the input, so this is unreachable for validated inputs, but
    /// the contract rejects rather than wraps.
    ///
    /// ## Example
    /// ```rust
    /// use commission_core::money::Money;
    /// use commission_core::types::Percent;
    ///
    /// let total = Money::from_cents(2_500_000); // $25,000.00
    /// let rate = Percent::from_bps(7000);       // 70%
    ///
    /// let share = total.percent_of(rate).unwrap();
    /// assert_eq!(share.cents(), 1_750_000);     // $17,500.00
    /// ```
    pub fn percent_of(&self, rate: Percent) -> Result<Money, CommissionError> {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        let cents = i64::try_from(cents).map_err(|_| CommissionError::ArithmeticOverflow {
            context: format!("{} of {}", rate, self),
        })?;
        Ok(Money::from_cents(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and error messages. Use frontend formatting for
/// actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(500_000, 0);
        assert_eq!(money.cents(), 50_000_000);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_percent_of_exact() {
        // $500,000.00 at 5% = $25,000.00, no rounding involved
        let price = Money::from_cents(50_000_000);
        let share = price.percent_of(Percent::from_bps(500)).unwrap();
        assert_eq!(share.cents(), 2_500_000);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // $10.01 at 50% = $5.005 → $5.01
        let amount = Money::from_cents(1001);
        let share = amount.percent_of(Percent::from_bps(5000)).unwrap();
        assert_eq!(share.cents(), 501);

        // $0.01 at 25% = $0.0025 → $0.00 (below the half)
        let cent = Money::from_cents(1);
        let share = cent.percent_of(Percent::from_bps(2500)).unwrap();
        assert_eq!(share.cents(), 0);

        // $0.01 at 50% = $0.005 → $0.01 (exactly half rounds up)
        let share = cent.percent_of(Percent::from_bps(5000)).unwrap();
        assert_eq!(share.cents(), 1);
    }

    #[test]
    fn test_percent_of_zero_amount() {
        let zero = Money::zero();
        let share = zero.percent_of(Percent::from_bps(7000)).unwrap();
        assert!(share.is_zero());
    }

    #[test]
    fn test_percent_of_overflow_rejected_not_wrapped() {
        // Percent admits any u32 so that out-of-range caller input reaches
        // validation; driven past 100% on a huge amount, the widened
        // product no longer fits in i64 cents and the contract rejects.
        use crate::error::CommissionError;

        let result = Money::from_cents(i64::MAX).percent_of(Percent::from_bps(u32::MAX));
        assert!(matches!(
            result,
            Err(CommissionError::ArithmeticOverflow { .. })
        ));
    }

    #[test]
    fn test_percent_of_full_rate_is_identity() {
        let amount = Money::from_cents(123_456_789);
        let share = amount.percent_of(Percent::from_bps(10_000)).unwrap();
        assert_eq!(share, amount);
    }

    /// Critical test: the subtraction-derived counterpart reconciles even
    /// when the computed side was rounded.
    #[test]
    fn test_split_reconciles_after_rounding() {
        let amount = Money::from_cents(1001);
        let side = amount.percent_of(Percent::from_bps(3333)).unwrap();
        let counterpart = amount - side;
        assert_eq!(side + counterpart, amount);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }
}
