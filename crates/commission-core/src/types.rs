//! # Domain Types
//!
//! Core domain types for the commission distribution engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ CommissionInput  │   │ CommissionRate   │   │    UplineRef     │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  price_cents     │   │  Percentage(bps) │   │  agent_id        │    │
//! │  │  rate            │   │  Fixed(cents)    │   │  name            │    │
//! │  │  representation  │   └──────────────────┘   │  bonus_bps       │    │
//! │  │  splits, upline  │                          └──────────────────┘    │
//! │  └──────────────────┘                                                   │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │     Percent      │   │ Representation-  │   │ Commission-      │    │
//! │  │  ──────────────  │   │ Mode             │   │ Breakdown        │    │
//! │  │  bps (u32)       │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  825 = 8.25%     │   │  Direct          │   │  all payouts,    │    │
//! │  └──────────────────┘   │  CoBroking       │   │  in cents        │    │
//! │                         └──────────────────┘   └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Compatibility
//! Every public type derives serde and `ts_rs::TS` so the CRM frontend
//! consumes the exact same shapes over the typed RPC layer. Monetary fields
//! travel as integer cents, percentages as integer basis points.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percent
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 7000 bps = 70% (a typical senior-tier commission split)
///
/// The type itself admits any u32 so that out-of-range caller input can be
/// carried to validation and reported, rather than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Creates a percent from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a percent from a percentage number (for convenience).
    ///
    /// `Percent::from_percentage(2.5)` == `Percent::from_bps(250)`.
    pub fn from_percentage(pct: f64) -> Self {
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage number (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the percent is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the percent is within the valid [0%, 100%] range.
    #[inline]
    pub const fn is_valid_split(&self) -> bool {
        self.0 <= 10_000
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

/// Display for error messages and logs: `825 bps` prints as `8.25%`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Commission Rate
// =============================================================================

/// How the total commission is derived from the property price.
///
/// Serialized adjacently tagged so the frontend form can post
/// `{ "kind": "percentage", "value": 500 }` or
/// `{ "kind": "fixed", "value": 1000000 }` without a union hack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CommissionRate {
    /// Rate in basis points of the property price (500 = 5%).
    Percentage(Percent),
    /// Flat commission amount in cents, independent of the price.
    Fixed(i64),
}

// =============================================================================
// Representation Mode
// =============================================================================

/// Who represents the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationMode {
    /// The agent represents only their own client; the whole commission
    /// stays on the agent's side.
    Direct,
    /// Two agencies share the transaction; the commission is split with
    /// the co-broker first.
    CoBroking,
}

// =============================================================================
// Upline Reference
// =============================================================================

/// The agent's upline, as resolved by the caller from the organizational
/// hierarchy. The engine never looks the upline up itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UplineRef {
    /// Identifier of the upline agent (opaque to the engine).
    pub agent_id: String,

    /// Display name, passed through for attribution.
    pub name: Option<String>,

    /// Leadership bonus rate in basis points, taken from the company's
    /// retained share. Zero means the upline earns nothing here.
    pub leadership_bonus_bps: u32,
}

impl UplineRef {
    /// Returns the leadership bonus rate.
    #[inline]
    pub fn leadership_bonus_rate(&self) -> Percent {
        Percent::from_bps(self.leadership_bonus_bps)
    }
}

// =============================================================================
// Commission Input
// =============================================================================

/// Everything the engine needs for one calculation, resolved up front.
///
/// Tier percentages and the upline bonus rate arrive here already looked
/// up from the agent profile and hierarchy; the engine only does math.
///
/// ## Field Notes
/// - `co_broker_split_bps` is only meaningful in `CoBroking` mode. A value
///   supplied in `Direct` mode is ignored, not an error, because direct
///   deals simply have no co-broker to pay.
/// - `agent_tier` is an opaque label ("Senior Partner", "Associate", …)
///   copied through to the breakdown for attribution. It never branches
///   the calculation; the resolved split percent already encodes the tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommissionInput {
    /// Agreed sale price of the property, in cents.
    pub property_price_cents: i64,

    /// How the total commission is derived from the price.
    pub rate: CommissionRate,

    /// Direct deal or co-broked deal.
    pub representation: RepresentationMode,

    /// Share of the total commission paid to the co-broker, in basis
    /// points. `None` in CoBroking mode falls back to
    /// [`DEFAULT_CO_BROKER_SPLIT_BPS`](crate::DEFAULT_CO_BROKER_SPLIT_BPS).
    pub co_broker_split_bps: Option<u32>,

    /// Tier label of the transacting agent (display only).
    pub agent_tier: String,

    /// Share of the agent-side commission the agent keeps, in basis
    /// points. The company keeps the remainder.
    pub company_split_bps: u32,

    /// The agent's upline, when one exists and has a bonus arrangement.
    pub upline: Option<UplineRef>,
}

impl CommissionInput {
    /// Returns the property price as Money.
    #[inline]
    pub fn property_price(&self) -> Money {
        Money::from_cents(self.property_price_cents)
    }

    /// Returns the agent's tier split.
    #[inline]
    pub fn company_split(&self) -> Percent {
        Percent::from_bps(self.company_split_bps)
    }

    /// Returns the co-broker split, if one was supplied.
    #[inline]
    pub fn co_broker_split(&self) -> Option<Percent> {
        self.co_broker_split_bps.map(Percent::from_bps)
    }
}

// =============================================================================
// Leadership Bonus
// =============================================================================

/// The override payment carved out of the company's share for the upline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeadershipBonus {
    /// Identifier of the upline agent receiving the bonus.
    pub upline_agent_id: String,

    /// Upline display name, if the caller supplied one.
    pub upline_name: Option<String>,

    /// Bonus rate applied to the company's gross share, in basis points.
    pub bonus_rate_bps: u32,

    /// Bonus amount in cents.
    pub bonus_amount_cents: i64,
}

impl LeadershipBonus {
    /// Returns the bonus amount as Money.
    #[inline]
    pub fn bonus_amount(&self) -> Money {
        Money::from_cents(self.bonus_amount_cents)
    }
}

// =============================================================================
// Commission Breakdown
// =============================================================================

/// The fully itemized result of one commission calculation.
///
/// A breakdown is created fresh by [`compute`](crate::calculator::compute)
/// on every request and never mutated afterwards; callers persist or
/// discard it. For any valid input these reconciliation identities hold
/// exactly, in cents:
///
/// ```text
/// total_commission    == agent_commission_share + co_broker_share (or 0)
/// agent_commission    == company_share_gross + agent_earnings
/// company_share_gross == company_share_net + leadership bonus (or 0)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommissionBreakdown {
    /// Total commission on the transaction, in cents.
    pub total_commission_cents: i64,

    /// Portion staying with the transacting agent's side after the
    /// representation split, in cents.
    pub agent_commission_share_cents: i64,

    /// Co-broker payout in cents. Present only for co-broked deals.
    pub co_broker_share_cents: Option<i64>,

    /// Company's cut before any leadership bonus, in cents.
    pub company_share_gross_cents: i64,

    /// Override paid to the upline, when one applies.
    pub leadership_bonus: Option<LeadershipBonus>,

    /// Company's cut after the leadership bonus, in cents.
    pub company_share_net_cents: i64,

    /// What the agent actually keeps, in cents.
    pub agent_earnings_cents: i64,

    /// Tier label of the agent, copied from the input for attribution.
    pub agent_tier: String,

    /// `agent_earnings / total_commission` in basis points, already
    /// rounded to the nearest 10 bps (one decimal place of percent).
    /// Display only; this value never re-enters arithmetic.
    pub your_share_bps: u32,
}

impl CommissionBreakdown {
    /// Returns the total commission as Money.
    #[inline]
    pub fn total_commission(&self) -> Money {
        Money::from_cents(self.total_commission_cents)
    }

    /// Returns the agent-side share as Money.
    #[inline]
    pub fn agent_commission_share(&self) -> Money {
        Money::from_cents(self.agent_commission_share_cents)
    }

    /// Returns the co-broker payout as Money, if any.
    #[inline]
    pub fn co_broker_share(&self) -> Option<Money> {
        self.co_broker_share_cents.map(Money::from_cents)
    }

    /// Returns the company's gross cut as Money.
    #[inline]
    pub fn company_share_gross(&self) -> Money {
        Money::from_cents(self.company_share_gross_cents)
    }

    /// Returns the company's net cut as Money.
    #[inline]
    pub fn company_share_net(&self) -> Money {
        Money::from_cents(self.company_share_net_cents)
    }

    /// Returns the agent's take-home as Money.
    #[inline]
    pub fn agent_earnings(&self) -> Money {
        Money::from_cents(self.agent_earnings_cents)
    }

    /// Returns the display share as a percentage number (e.g. `35.0`).
    #[inline]
    pub fn your_share_percent(&self) -> f64 {
        self.your_share_bps as f64 / 100.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_from_bps() {
        let rate = Percent::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert!((rate.percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_percent_from_percentage() {
        let rate = Percent::from_percentage(8.25);
        assert_eq!(rate.bps(), 825);

        let fractional = Percent::from_percentage(2.5);
        assert_eq!(fractional.bps(), 250);
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(Percent::from_bps(7000).to_string(), "70%");
        assert_eq!(Percent::from_bps(825).to_string(), "8.25%");
        assert_eq!(Percent::from_bps(0).to_string(), "0%");
    }

    #[test]
    fn test_percent_valid_split_range() {
        assert!(Percent::from_bps(0).is_valid_split());
        assert!(Percent::from_bps(10_000).is_valid_split());
        assert!(!Percent::from_bps(10_001).is_valid_split());
    }

    #[test]
    fn test_commission_rate_wire_shape() {
        // The frontend posts an adjacently tagged union; pin the shape.
        let pct: CommissionRate = serde_json::from_str(
            r#"{ "kind": "percentage", "value": 500 }"#,
        )
        .unwrap();
        assert_eq!(pct, CommissionRate::Percentage(Percent::from_bps(500)));

        let fixed: CommissionRate = serde_json::from_str(
            r#"{ "kind": "fixed", "value": 1000000 }"#,
        )
        .unwrap();
        assert_eq!(fixed, CommissionRate::Fixed(1_000_000));
    }

    #[test]
    fn test_representation_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&RepresentationMode::CoBroking).unwrap(),
            r#""co_broking""#
        );
        assert_eq!(
            serde_json::to_string(&RepresentationMode::Direct).unwrap(),
            r#""direct""#
        );
    }

    #[test]
    fn test_breakdown_display_percent() {
        let breakdown = CommissionBreakdown {
            total_commission_cents: 2_500_000,
            agent_commission_share_cents: 2_500_000,
            co_broker_share_cents: None,
            company_share_gross_cents: 750_000,
            leadership_bonus: None,
            company_share_net_cents: 750_000,
            agent_earnings_cents: 1_750_000,
            agent_tier: "Senior Partner".to_string(),
            your_share_bps: 7000,
        };
        assert!((breakdown.your_share_percent() - 70.0).abs() < f64::EPSILON);
    }
}
