//! Snapshot assembly from account data.
//!
//! Sums per-position initial margin and unrealized P&L into the aggregate
//! fields the classifier consumes. No validation: malformed numbers
//! propagate arithmetically, matching the classifier's no-validation
//! contract.

use risk_core::classify::AccountSnapshot;

use crate::feed::payload::{AccountSummary, OpenPosition};

/// Assemble a classifier snapshot from one consistent account fetch.
pub fn build_snapshot(summary: &AccountSummary, positions: &[OpenPosition]) -> AccountSnapshot {
    let initial_margin_total: f64 = positions.iter().map(|p| p.initial_margin).sum();
    let unrealized_pnl: f64 = positions.iter().map(|p| p.unrealized_pnl).sum();

    AccountSnapshot {
        total_assets: summary.total_assets,
        unrealized_pnl,
        initial_margin_total,
        has_positions: !positions.is_empty(),
    }
}
