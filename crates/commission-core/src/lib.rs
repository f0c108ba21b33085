//! # commission-core: Pure Commission Distribution Logic
//!
//! This crate is the **heart** of the agency CRM's commission pipeline. It
//! contains the multi-level commission distribution engine as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Agency CRM Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Frontend (React)                              │   │
//! │  │   Deal Form ──► Commission Wizard ──► Breakdown Panel           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed RPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   RPC Layer (outside this repo)                 │   │
//! │  │   resolves agent tier, splits, and upline from the org chart,   │   │
//! │  │   then calls compute() and persists the breakdown               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ commission-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ calculator │  │ validation│  │   │
//! │  │   │  Percent  │  │   Money   │  │  4-stage   │  │   rules   │  │   │
//! │  │   │  Input    │  │  percent_ │  │  cascade   │  │   checks  │  │   │
//! │  │   │  Breakdown│  │  of()     │  │            │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CommissionInput, CommissionBreakdown, Percent, …)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input range validation
//! - [`calculator`] - The four-stage cascade
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Exact Reconciliation**: Every split derives its counterpart by subtraction,
//!    so payouts sum back to the whole to the cent
//! 5. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use commission_core::calculator::compute;
//! use commission_core::types::{
//!     CommissionInput, CommissionRate, Percent, RepresentationMode,
//! };
//!
//! // $500,000 sale, 5% commission, direct deal, agent keeps 70%
//! let input = CommissionInput {
//!     property_price_cents: 50_000_000,
//!     rate: CommissionRate::Percentage(Percent::from_bps(500)),
//!     representation: RepresentationMode::Direct,
//!     co_broker_split_bps: None,
//!     agent_tier: "Senior Partner".to_string(),
//!     company_split_bps: 7000,
//!     upline: None,
//! };
//!
//! let breakdown = compute(&input).unwrap();
//! assert_eq!(breakdown.total_commission_cents, 2_500_000);
//! assert_eq!(breakdown.agent_earnings_cents, 1_750_000);
//! assert_eq!(breakdown.company_share_net_cents, 750_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use commission_core::Money` instead of
// `use commission_core::money::Money`

pub use calculator::compute;
pub use error::{CommissionError, CommissionResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Co-broker split used when a co-broked deal does not specify one, in
/// basis points (5000 = 50/50).
///
/// ## Why a constant?
/// Historically some call sites treated the split as required while others
/// assumed an even split. The engine applies ONE policy uniformly: an
/// absent split on a co-broking deal means 50/50, never an error. Callers
/// that want the split to be mandatory enforce that in their own form
/// validation before reaching this crate.
pub const DEFAULT_CO_BROKER_SPLIT_BPS: u32 = 5000;
