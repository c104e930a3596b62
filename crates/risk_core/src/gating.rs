//! Tier-driven order gating.
//!
//! One rule table shared by every order-entry call site:
//! - Safe / Warning: opens and closes allowed.
//! - Restriction: close-only — new opens rejected.
//! - Liquidation: opens rejected; closes still allowed so positions can be
//!   reduced right up to liquidation.

use crate::classify::RiskLevel;

/// Whether an order increases or reduces exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Open,
    Close,
}

/// Reject reason for the order gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderGateRejectReason {
    /// Account is in Restriction: only closing orders are accepted.
    CloseOnly,
    /// Account is liquidation-eligible: no new exposure.
    LiquidationPending,
}

/// Order gate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderGateResult {
    Allowed,
    Rejected { reason: OrderGateRejectReason },
}

/// Metrics for order gate outcomes.
#[derive(Debug, Default)]
pub struct OrderGateMetrics {
    allowed_total: u64,
    reject_close_only_total: u64,
    reject_liquidation_total: u64,
}

impl OrderGateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_total(&self) -> u64 {
        self.allowed_total
    }

    pub fn reject_close_only_total(&self) -> u64 {
        self.reject_close_only_total
    }

    pub fn reject_liquidation_total(&self) -> u64 {
        self.reject_liquidation_total
    }

    fn record_allowed(&mut self) {
        self.allowed_total += 1;
    }

    fn record_reject(&mut self, reason: OrderGateRejectReason) {
        match reason {
            OrderGateRejectReason::CloseOnly => self.reject_close_only_total += 1,
            OrderGateRejectReason::LiquidationPending => self.reject_liquidation_total += 1,
        }
    }
}

/// Evaluate whether an order is admissible at the given risk tier.
pub fn evaluate_order_gate(
    level: RiskLevel,
    direction: OrderDirection,
    metrics: &mut OrderGateMetrics,
) -> OrderGateResult {
    // Closing orders reduce exposure and pass at every tier.
    if direction == OrderDirection::Close {
        metrics.record_allowed();
        return OrderGateResult::Allowed;
    }

    let reason = match level {
        RiskLevel::Safe | RiskLevel::Warning => {
            metrics.record_allowed();
            return OrderGateResult::Allowed;
        }
        RiskLevel::Restriction => OrderGateRejectReason::CloseOnly,
        RiskLevel::Liquidation => OrderGateRejectReason::LiquidationPending,
    };

    metrics.record_reject(reason);
    tracing::debug!(
        "OrderGateReject reason={:?} level={}",
        reason,
        level.as_str()
    );
    OrderGateResult::Rejected { reason }
}
