//! # afcfta-scoring — Market Attractiveness Heuristics
//!
//! Two independent analyses over read-only [`Country`](afcfta_core::Country)
//! profiles:
//!
//! - [`icp`]: the Investment Climate & Potential score for one
//!   origin/destination pair, eight weighted components on a 0–100 scale.
//! - [`opportunity`]: destination ranking for an exporter, and the
//!   elasticity-based trade-creation estimate for a tariff cut.
//!
//! Scores are `f64` rounded to two decimals. Neither module reads anything
//! but its arguments.

pub mod icp;
pub mod opportunity;

pub use icp::{score, IcpComponent, IcpRating, IcpScoreResult};
pub use opportunity::{
    estimate_trade_creation, rank_opportunities, rank_opportunities_for, TradeCreationEstimate,
    TradeCreationLevel, TradeOpportunity, DEFAULT_ELASTICITY,
};

/// Round a score to two decimals.
pub(crate) fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp to [0, 100]; non-finite input scores 0.
pub(crate) fn bounded(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
