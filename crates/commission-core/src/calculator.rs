//! # Commission Calculator
//!
//! The four-stage commission cascade. This is the only entry point of the
//! crate: raw inputs go in, a fully itemized [`CommissionBreakdown`] comes
//! out, or an error before any stage has run.
//!
//! ## The Cascade
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Multi-Level Commission Cascade                       │
//! │                                                                         │
//! │  Stage 1: property_price × rate  (or fixed amount)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total_commission                                                       │
//! │       │                                                                 │
//! │  Stage 2: representation split                                         │
//! │       ├──► co_broker_share        (CoBroking only, × split)            │
//! │       └──► agent_commission_share (total − co_broker_share)            │
//! │                │                                                        │
//! │  Stage 3: company/agent tier split                                     │
//! │                ├──► agent_earnings      (× company_split)              │
//! │                └──► company_share_gross (share − earnings)             │
//! │                         │                                               │
//! │  Stage 4: leadership bonus (only with an upline at rate > 0)           │
//! │                         ├──► bonus_amount      (× bonus rate)          │
//! │                         └──► company_share_net (gross − bonus)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Subtraction, Not a Second Multiplication
//! Each stage computes exactly ONE side of its split with a rounded
//! percentage and derives the other side by subtraction. Computing both
//! sides independently (`× split` and `× (100 − split)`) can lose or mint
//! a cent when both products round the same way; the subtraction form
//! makes the reconciliation identities hold to the cent, always. Do not
//! "simplify" this.
//!
//! ## Purity
//! No I/O, no shared state, no clock, no randomness. Identical input
//! yields a bit-identical breakdown, and concurrent callers need no
//! locking because each call owns its input and output.
//!
//! ## Usage
//! ```rust
//! use commission_core::calculator::compute;
//! use commission_core::types::{
//!     CommissionInput, CommissionRate, Percent, RepresentationMode,
//! };
//!
//! let input = CommissionInput {
//!     property_price_cents: 50_000_000, // $500,000.00
//!     rate: CommissionRate::Percentage(Percent::from_bps(500)), // 5%
//!     representation: RepresentationMode::Direct,
//!     co_broker_split_bps: None,
//!     agent_tier: "Senior Partner".to_string(),
//!     company_split_bps: 7000, // agent keeps 70%
//!     upline: None,
//! };
//!
//! let breakdown = compute(&input).unwrap();
//! assert_eq!(breakdown.total_commission_cents, 2_500_000); // $25,000.00
//! assert_eq!(breakdown.agent_earnings_cents, 1_750_000);   // $17,500.00
//! ```

use crate::error::CommissionResult;
use crate::money::Money;
use crate::types::{
    CommissionBreakdown, CommissionInput, CommissionRate, LeadershipBonus, Percent,
    RepresentationMode,
};
use crate::validation::validate_input;
use crate::DEFAULT_CO_BROKER_SPLIT_BPS;

// =============================================================================
// Entry Point
// =============================================================================

/// Computes the full commission breakdown for one transaction.
///
/// Validates every field first (see [`crate::validation::validate_input`]);
/// a rejected input returns an error before stage 1 runs, never a partial
/// breakdown.
///
/// ## Stage Order
/// 1. Total commission from price and rate
/// 2. Representation split (co-broker paid first, agent side by subtraction)
/// 3. Company/agent tier split (earnings computed, company by subtraction)
/// 4. Leadership bonus carved out of the company's gross share
///
/// The display ratio `your_share_bps` is derived from the rounded stage
/// outputs as the last step and never feeds back into the amounts.
pub fn compute(input: &CommissionInput) -> CommissionResult<CommissionBreakdown> {
    validate_input(input)?;

    // Stage 1: total commission.
    let total_commission = match input.rate {
        CommissionRate::Percentage(rate) => input.property_price().percent_of(rate)?,
        CommissionRate::Fixed(cents) => Money::from_cents(cents),
    };

    // Stage 2: representation split. Direct deals keep everything on the
    // agent's side; co-broked deals pay the co-broker their percentage and
    // keep the remainder.
    let (agent_commission_share, co_broker_share) = match input.representation {
        RepresentationMode::Direct => (total_commission, None),
        RepresentationMode::CoBroking => {
            let split = input
                .co_broker_split()
                .unwrap_or(Percent::from_bps(DEFAULT_CO_BROKER_SPLIT_BPS));
            let co_broker = total_commission.percent_of(split)?;
            (total_commission - co_broker, Some(co_broker))
        }
    };

    // Stage 3: company/agent tier split on the agent-side share.
    let agent_earnings = agent_commission_share.percent_of(input.company_split())?;
    let company_share_gross = agent_commission_share - agent_earnings;

    // Stage 4: leadership bonus, funded from the company's gross share.
    // An absent upline and a zero-rate upline are the same thing here.
    let (leadership_bonus, company_share_net) = match &input.upline {
        Some(upline) if upline.leadership_bonus_bps > 0 => {
            let bonus_amount = company_share_gross.percent_of(upline.leadership_bonus_rate())?;
            let bonus = LeadershipBonus {
                upline_agent_id: upline.agent_id.clone(),
                upline_name: upline.name.clone(),
                bonus_rate_bps: upline.leadership_bonus_bps,
                bonus_amount_cents: bonus_amount.cents(),
            };
            (Some(bonus), company_share_gross - bonus_amount)
        }
        _ => (None, company_share_gross),
    };

    Ok(CommissionBreakdown {
        total_commission_cents: total_commission.cents(),
        agent_commission_share_cents: agent_commission_share.cents(),
        co_broker_share_cents: co_broker_share.map(|m| m.cents()),
        company_share_gross_cents: company_share_gross.cents(),
        leadership_bonus,
        company_share_net_cents: company_share_net.cents(),
        agent_earnings_cents: agent_earnings.cents(),
        agent_tier: input.agent_tier.clone(),
        your_share_bps: display_share_bps(agent_earnings, total_commission),
    })
}

// =============================================================================
// Display Ratio
// =============================================================================

/// `earnings / total` in basis points, rounded half-up to the nearest
/// 10 bps (one decimal place of percent). Zero when the total is zero so
/// zero-commission deals never divide by zero.
fn display_share_bps(earnings: Money, total: Money) -> u32 {
    if total.is_zero() {
        return 0;
    }

    // Tenths of a percent, half-up: round(earnings * 1000 / total).
    let earnings = earnings.cents() as i128;
    let total = total.cents() as i128;
    let tenths = (earnings * 2000 + total) / (total * 2);

    (tenths as u32) * 10
}

// =============================================================================
// Unit Tests
// =============================================================================
